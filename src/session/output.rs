//! Plain-text rendering of results for headless commands

use crate::cli_messages::print_heading;
use crate::intel::types::{CampaignInsight, IntelligenceReport, SalesScript};
use crate::leads::Lead;

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_report(industry: &str, report: &IntelligenceReport) {
    print_heading(&format!("MARKET INTELLIGENCE: {}", industry));
    println!("{}", report.summary);

    print_heading("KEY TRENDS");
    for trend in &report.trends {
        println!(
            "  {} ({}, {:+.1}%): {}",
            trend.topic, trend.sentiment, trend.growth, trend.description
        );
    }

    print_heading("COMPETITOR ANALYSIS");
    for competitor in &report.competitors {
        println!(
            "  {} [{} threat]: {}",
            competitor.competitor, competitor.threat_level, competitor.strategy
        );
    }

    print_heading("TOP OPPORTUNITIES");
    println!("{}", bullets(&report.opportunities));

    if !report.grounding_sources.is_empty() {
        print_heading("GROUNDING SOURCES");
        for source in &report.grounding_sources {
            println!("  {} <{}>", source.title, source.uri);
        }
    }
}

pub fn print_script(lead: &Lead, script: &SalesScript) {
    print_heading(&format!("PITCH FOR {} ({})", lead.name, lead.company));
    println!("Opening:\n  \"{}\"", script.opening);
    println!("Value proposition:\n  {}", script.value_prop);
    println!("Handling objections:\n{}", bullets(&script.handling_objections));
    println!("The close:\n  {}", script.closing);
}

pub fn print_campaign(plan: &CampaignInsight) {
    print_heading(&format!("CAMPAIGN PLAN: {}", plan.objective));
    println!("Target audience:\n  {}", plan.target_audience);
    println!("Channels:\n{}", bullets(&plan.channels));
    println!("Campaign idea:\n  {}", plan.campaign_idea);
}

/// One row per lead: id, name, company, industry, intent, status.
pub fn lead_row(lead: &Lead) -> String {
    format!(
        "{:>3}  {:<16} {:<18} {:<12} {:>3}%  {}",
        lead.id, lead.name, lead.company, lead.industry, lead.intent_score, lead.status
    )
}

pub fn print_leads(leads: &[Lead]) {
    print_heading("LEADS");
    for lead in leads {
        println!("{}", lead_row(lead));
    }
}
