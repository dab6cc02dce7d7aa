//! Command-line interface for `sf-schema`.

use std::io::Write;

use busbar_sf_auth::SalesforceCredentials;
use busbar_sf_client::ClientConfig;
use busbar_sf_rest::SalesforceRestClient;
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::{FieldLister, FieldQuery, SortKey, DEFAULT_SORT_KEY};

#[derive(Debug, Parser)]
#[command(name = "sf-schema")]
#[command(about = "Inspect Salesforce SObject field metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Org alias or username known to the `sf` CLI
    ///
    /// Without it, SF_INSTANCE_URL and SF_ACCESS_TOKEN are read from the environment.
    #[arg(short = 'o', long, env = "SF_TARGET_ORG", global = true)]
    pub target_org: Option<String>,

    /// Print the raw describe response in a JSON envelope
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List an SObject's fields, or show one field in detail
    Fields(FieldsCommand),
}

#[derive(Debug, Clone, Args)]
pub struct FieldsCommand {
    /// SObject API name, e.g. Account or Invoice__c
    #[arg(short = 'n', long)]
    pub sobject: String,

    /// Show the full descriptor of this field (case-insensitive)
    #[arg(short, long)]
    pub field: Option<String>,

    /// Field attribute to sort the listing by
    #[arg(short, long, default_value = DEFAULT_SORT_KEY)]
    pub sortby: SortKey,
}

impl Cli {
    /// Load the session and run the chosen command.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Value> {
        let creds = self.credentials().await?;
        let client = SalesforceRestClient::from_credentials(&creds, ClientConfig::default())?;

        match &self.command {
            Commands::Fields(cmd) => cmd.execute(client, self.json, out).await,
        }
    }

    async fn credentials(&self) -> Result<SalesforceCredentials> {
        let creds = match &self.target_org {
            Some(org) => {
                debug!(org = %org, "Loading credentials from sf CLI");
                SalesforceCredentials::from_sfdx_alias(org).await?
            }
            None => {
                debug!("Loading credentials from environment");
                SalesforceCredentials::from_env()?
            }
        };
        Ok(creds.validated()?)
    }
}

impl FieldsCommand {
    pub fn query(&self) -> FieldQuery {
        FieldQuery {
            field: self.field.clone(),
            sort_key: self.sortby.clone(),
        }
    }

    /// Describe the SObject and print it to `out`, flushing before return.
    ///
    /// With `json` set, the rendered table or detail is replaced by the
    /// success envelope around the raw response.
    pub async fn execute<W: Write>(
        &self,
        client: SalesforceRestClient,
        json: bool,
        out: &mut W,
    ) -> Result<Value> {
        let lister = FieldLister::new(client);

        let describe = if json {
            let describe = lister.describe(&self.sobject).await?;
            write_json_success(&describe, out)?;
            describe
        } else {
            lister.list_fields(&self.sobject, &self.query(), out).await?
        };

        out.flush()?;
        Ok(describe)
    }
}

/// `{"status": 0, "result": ...}`
pub fn write_json_success<W: Write>(result: &Value, out: &mut W) -> Result<()> {
    let envelope = json!({"status": 0, "result": result});
    writeln!(out, "{}", serde_json::to_string_pretty(&envelope)?)?;
    Ok(())
}

/// `{"status": 1, "name": ..., "message": ...}`
pub fn write_json_error<W: Write>(err: &Error, out: &mut W) -> Result<()> {
    let envelope = json!({"status": 1, "name": err.name(), "message": err.to_string()});
    writeln!(out, "{}", serde_json::to_string_pretty(&envelope)?)?;
    out.flush()?;
    Ok(())
}
