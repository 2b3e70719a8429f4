//! Lead records and the seed pipeline shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Where a lead sits in the sales pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[strum(to_string = "New")]
    New,
    #[strum(to_string = "Contacted")]
    Contacted,
    #[strum(to_string = "Qualified")]
    Qualified,
    #[strum(to_string = "Lost")]
    Lost,
}

/// A sales prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub industry: String,
    /// Likelihood to convert, 0-100.
    pub intent_score: u8,
    pub status: LeadStatus,
    pub last_activity: String,
}

impl Lead {
    fn seed(
        id: &str,
        name: &str,
        company: &str,
        industry: &str,
        intent_score: u8,
        status: LeadStatus,
        last_activity: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            industry: industry.to_string(),
            intent_score: intent_score.min(100),
            status,
            last_activity: last_activity.to_string(),
        }
    }

    /// Free-text description of the lead handed to the pitch generator.
    pub fn pitch_context(&self) -> String {
        format!(
            "{} from {} in the {} sector",
            self.name, self.company, self.industry
        )
    }

    /// Intent score on a ten point scale, e.g. `9.2`.
    pub fn strength_out_of_ten(&self) -> f64 {
        f64::from(self.intent_score) / 10.0
    }

    pub fn strength_label(&self) -> &'static str {
        match self.intent_score {
            80..=100 => "High",
            50..=79 => "Medium",
            _ => "Low",
        }
    }
}

/// A meeting on today's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub time: String,
    pub title: String,
    pub with: String,
}

/// The fixed pipeline the dashboard starts with.
pub fn seed_leads() -> Vec<Lead> {
    vec![
        Lead::seed(
            "1",
            "Alex Rivera",
            "CloudScale Inc.",
            "SaaS",
            92,
            LeadStatus::New,
            "2h ago",
        ),
        Lead::seed(
            "2",
            "Sarah Chen",
            "Nova Health",
            "Healthtech",
            74,
            LeadStatus::Contacted,
            "5h ago",
        ),
        Lead::seed(
            "3",
            "Marcus Thorne",
            "GreenPace",
            "Renewables",
            48,
            LeadStatus::New,
            "1d ago",
        ),
        Lead::seed(
            "4",
            "Elena Vance",
            "Blackwood Capital",
            "Fintech",
            88,
            LeadStatus::Qualified,
            "1h ago",
        ),
    ]
}

pub fn seed_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            time: "10:00 AM".to_string(),
            title: "Product Demo".to_string(),
            with: "Sarah Chen".to_string(),
        },
        Meeting {
            time: "02:30 PM".to_string(),
            title: "Contract Review".to_string(),
            with: "Elena Vance".to_string(),
        },
    ]
}

/// Look up a lead by id.
pub fn find_lead<'a>(leads: &'a [Lead], id: &str) -> Option<&'a Lead> {
    leads.iter().find(|lead| lead.id == id)
}

/// Mean intent score across the pipeline, `0.0` when empty.
pub fn average_intent(leads: &[Lead]) -> f64 {
    if leads.is_empty() {
        return 0.0;
    }
    let total: u32 = leads.iter().map(|lead| u32::from(lead.intent_score)).sum();
    f64::from(total) / leads.len() as f64
}

pub fn qualified_count(leads: &[Lead]) -> usize {
    leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Qualified)
        .count()
}

/// Average intent per industry in first-seen order, for the market map.
pub fn intent_by_industry(leads: &[Lead]) -> Vec<(String, u64)> {
    let mut buckets: Vec<(String, u64, u64)> = Vec::new();
    for lead in leads {
        match buckets.iter_mut().find(|(industry, _, _)| *industry == lead.industry) {
            Some((_, sum, count)) => {
                *sum += u64::from(lead.intent_score);
                *count += 1;
            }
            None => buckets.push((lead.industry.clone(), u64::from(lead.intent_score), 1)),
        }
    }
    buckets
        .into_iter()
        .map(|(industry, sum, count)| (industry, sum / count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_pipeline_has_four_leads() {
        let leads = seed_leads();
        assert_eq!(leads.len(), 4);
        assert_eq!(leads[0].id, "1");
        assert_eq!(leads[0].name, "Alex Rivera");
        assert_eq!(leads[3].status, LeadStatus::Qualified);
    }

    #[test]
    fn test_pitch_context_mentions_name_company_and_industry() {
        let leads = seed_leads();
        let alex = find_lead(&leads, "1").unwrap();
        assert_eq!(
            alex.pitch_context(),
            "Alex Rivera from CloudScale Inc. in the SaaS sector"
        );
    }

    #[test]
    fn test_pipeline_stats() {
        let leads = seed_leads();
        assert!((average_intent(&leads) - 75.5).abs() < f64::EPSILON);
        assert_eq!(qualified_count(&leads), 1);
        assert_eq!(average_intent(&[]), 0.0);
    }

    #[test]
    fn test_strength_label_thresholds() {
        let leads = seed_leads();
        assert_eq!(leads[0].strength_label(), "High");
        assert_eq!(leads[1].strength_label(), "Medium");
        assert_eq!(leads[2].strength_label(), "Low");
        assert!((leads[0].strength_out_of_ten() - 9.2).abs() < 1e-9);
    }

    #[test]
    fn test_intent_by_industry_preserves_order() {
        let mut leads = seed_leads();
        leads.push(Lead::seed("5", "Ana", "Acme", "SaaS", 60, LeadStatus::Lost, "3d ago"));

        let buckets = intent_by_industry(&leads);
        assert_eq!(buckets[0], ("SaaS".to_string(), 76));
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&LeadStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
        assert_eq!(LeadStatus::Contacted.to_string(), "Contacted");
    }
}
