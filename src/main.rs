mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod intel;
mod leads;
mod llm;
mod logging;
mod session;
mod ui;
mod workers;

use crate::config::{Config, ProviderKind, get_config_path};
use crate::events::FlowOutcome;
use crate::intel::IntelligenceService;
use crate::leads::{find_lead, seed_leads};
use crate::session::output::{print_campaign, print_leads, print_report, print_script};
use crate::session::{build_service, run_headless_request, run_tui_mode, setup_session};
use crate::workers::{CampaignRequest, IntelRequest, PitchRequest, Request};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// MarketMind: sales and market intelligence in your terminal
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Use the offline demo backend instead of a live model
        #[arg(long)]
        demo: bool,

        /// Paint the dashboard background
        #[arg(long)]
        with_background: bool,
    },
    /// Print a market intelligence report for an industry
    Scan {
        /// Industry to analyze; the configured default when absent
        #[arg(long, value_name = "INDUSTRY")]
        industry: Option<String>,

        #[arg(long)]
        demo: bool,
    },
    /// Write a sales pitch for one of the pipeline leads
    Pitch {
        /// Lead ID as shown by `marketmind leads`
        #[arg(long = "lead", value_name = "LEAD_ID")]
        lead_id: String,

        #[arg(long)]
        demo: bool,
    },
    /// Suggest audience, channels and an idea for a campaign objective
    Campaign {
        #[arg(long, value_name = "TEXT")]
        objective: String,

        #[arg(long)]
        demo: bool,
    },
    /// List the leads in the pipeline
    Leads,
    /// Update the configuration file
    Configure {
        /// gemini, openai or demo
        #[arg(long, value_parser = parse_provider)]
        provider: Option<ProviderKind>,

        #[arg(long)]
        model: Option<String>,

        /// Name of the environment variable holding the API key
        #[arg(long, value_name = "VAR")]
        api_key_env: Option<String>,

        /// Custom endpoint for OpenAI-compatible providers
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Default industry for market scans
        #[arg(long)]
        industry: Option<String>,

        /// Product the sales copilot pitches
        #[arg(long)]
        product: Option<String>,
    },
    /// Delete the configuration file
    Reset,
}

fn parse_provider(raw: &str) -> Result<ProviderKind, String> {
    raw.parse::<ProviderKind>()
        .map_err(|_| format!("unknown provider '{}': expected gemini, openai or demo", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            demo,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let session = setup_session(select_backend(&config, demo)?);
            run_tui_mode(session, &config, with_background).await
        }
        Command::Scan { industry, demo } => {
            let config = Config::load_or_default(&config_path)?;
            let industry = industry.unwrap_or_else(|| config.default_industry.clone());
            if industry.trim().is_empty() {
                return Err(Box::from("Industry must not be blank."));
            }
            let request = Request::Scan(IntelRequest {
                ticket: 1,
                industry: industry.clone(),
            });
            match run_request(&config, demo, request).await? {
                Some(FlowOutcome::Intel { result, .. }) => {
                    let report = result.map_err(|e| fail("Market scan failed", e))?;
                    print_report(&industry, &report);
                    Ok(())
                }
                _ => Ok(()),
            }
        }
        Command::Pitch { lead_id, demo } => {
            let config = Config::load_or_default(&config_path)?;
            let leads = seed_leads();
            let Some(lead) = find_lead(&leads, &lead_id) else {
                let reason = format!("No lead with ID {}", lead_id);
                return Err(fail("Unknown lead", reason));
            };
            let request = Request::Pitch(PitchRequest {
                ticket: 1,
                lead_id: lead.id.clone(),
                lead_context: lead.pitch_context(),
                product: config.product_description.clone(),
            });
            match run_request(&config, demo, request).await? {
                Some(FlowOutcome::Script { result, .. }) => {
                    let script = result.map_err(|e| fail("Pitch generation failed", e))?;
                    print_script(lead, &script);
                    Ok(())
                }
                _ => Ok(()),
            }
        }
        Command::Campaign { objective, demo } => {
            let config = Config::load_or_default(&config_path)?;
            let request = Request::Campaign(CampaignRequest { objective });
            match run_request(&config, demo, request).await? {
                Some(FlowOutcome::Campaign { result }) => {
                    let plan = result.map_err(|e| fail("Campaign planning failed", e))?;
                    print_campaign(&plan);
                    Ok(())
                }
                _ => Ok(()),
            }
        }
        Command::Leads => {
            print_leads(&seed_leads());
            Ok(())
        }
        Command::Configure {
            provider,
            model,
            api_key_env,
            base_url,
            industry,
            product,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(provider) = provider {
                config.provider = provider;
            }
            if model.is_some() {
                config.model = model;
            }
            if api_key_env.is_some() {
                config.api_key_env = api_key_env;
            }
            if base_url.is_some() {
                config.base_url = base_url;
            }
            if let Some(industry) = industry {
                config.default_industry = industry;
            }
            if let Some(product) = product {
                config.product_description = product;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "{} (provider: {})",
                config_path.display(),
                config.provider
            );
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "removing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Runs one request against the selected backend in headless mode.
async fn run_request(
    config: &Config,
    demo: bool,
    request: Request,
) -> Result<Option<FlowOutcome>, Box<dyn Error>> {
    let session = setup_session(select_backend(config, demo)?);
    let outcome = run_headless_request(session, request).await?;
    if outcome.is_none() {
        print_cmd_warn!("Interrupted", "the request did not finish");
    }
    Ok(outcome)
}

fn select_backend(
    config: &Config,
    demo: bool,
) -> Result<Arc<dyn IntelligenceService>, Box<dyn Error>> {
    build_service(config, demo).inspect_err(|e| {
        print_cmd_error!("Backend unavailable", e.to_string().as_str());
        print_cmd_info!("Hint", "pass --demo to run with the offline backend");
    })
}

/// Reports a failed flow and turns it into the command's error.
fn fail(title: &str, reason: String) -> Box<dyn Error> {
    print_cmd_error!(title, reason.as_str());
    Box::from(format!("{}: {}", title, reason))
}
