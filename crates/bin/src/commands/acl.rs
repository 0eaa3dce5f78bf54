//! ACL command - validates an ACL document through its registered proxy.

use docfeed::{
    ProxyRegistry,
    model::{self, Acl},
};

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::output::{OutputFormat, print_table};

/// Parse and validate an ACL document.
pub fn parse_acl(registry: &ProxyRegistry, json: &str) -> docfeed::Result<Acl> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(registry.deserialize::<Acl>(value)?)
}

fn join(names: &std::collections::BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Run the acl command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let registry = model::registry()?;
    let input = read_input(args.input.as_deref())?;
    let acl = parse_acl(&registry, &input)?;

    match format {
        OutputFormat::Human => {
            let inherit_from = acl
                .inherit_from()
                .map(|id| id.to_string())
                .unwrap_or_default();
            let rows = vec![
                vec!["permit users".to_string(), join(acl.permit_users())],
                vec!["deny users".to_string(), join(acl.deny_users())],
                vec!["permit groups".to_string(), join(acl.permit_groups())],
                vec!["deny groups".to_string(), join(acl.deny_groups())],
                vec!["inherit from".to_string(), inherit_from],
                vec![
                    "inheritance".to_string(),
                    acl.inheritance_type().to_string(),
                ],
            ];
            print_table(&["FIELD", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            let value = registry.serialize(&acl)?;
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
