//! Dashboard state management
//!
//! Contains the dashboard view state and its single-writer transitions. Every
//! request the dashboard issues gets a ticket; a completion is applied only if
//! it carries the latest ticket of its flow.

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, MAX_QUERY_LEN};
use crate::events::Event as WorkerEvent;
use crate::intel::types::{GeneratedScript, IntelligenceReport, SalesScript};
use crate::leads::{Lead, Meeting, find_lead, seed_leads, seed_meetings};
use crate::ui::UIConfig;
use crate::workers::{IntelRequest, PitchRequest};

use std::collections::VecDeque;
use std::time::Instant;

/// Lead the AI recommended action points at.
pub const RECOMMENDED_LEAD_ID: &str = "1";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum Tab {
    #[default]
    #[strum(serialize = "Pipeline")]
    Pipeline,
    #[strum(serialize = "Market Intel")]
    Intelligence,
    #[strum(serialize = "Sales Copilot")]
    Copilot,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Pipeline, Tab::Intelligence, Tab::Copilot];

    pub fn index(self) -> usize {
        match self {
            Tab::Pipeline => 0,
            Tab::Intelligence => 1,
            Tab::Copilot => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where a lead selection came from. Pipeline cards and the recommended
/// action jump to the copilot; the copilot's own picker stays put.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionOrigin {
    Pipeline,
    Recommendation,
    Copilot,
}

impl SelectionOrigin {
    fn switches_to_copilot(self) -> bool {
        matches!(self, SelectionOrigin::Pipeline | SelectionOrigin::Recommendation)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Flow {
    #[strum(serialize = "Market scan")]
    MarketScan,
    #[strum(serialize = "Pitch generation")]
    Pitch,
}

/// Last failed request, shown until dismissed or the flow succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub flow: Flow,
    pub message: String,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Seed pipeline, never mutated.
    pub leads: Vec<Lead>,
    pub meetings: Vec<Meeting>,
    /// Name of the intelligence backend, shown in the header.
    pub backend_name: String,
    /// Product pitched by the sales copilot.
    pub product: String,
    /// Whether to enable background colors
    pub with_background_color: bool,

    active_tab: Tab,
    industry_query: String,
    /// Whether keystrokes go to the industry query box.
    pub editing_query: bool,

    report: Option<IntelligenceReport>,
    intel_loading: bool,
    intel_ticket: u64,

    selected_lead: Option<Lead>,
    script: Option<GeneratedScript>,
    script_generating: bool,
    pitch_ticket: u64,

    notice: Option<FailureNotice>,

    /// Highlighted card on the pipeline tab.
    pub pipeline_cursor: usize,
    /// Highlighted lead in the copilot picker.
    pub copilot_cursor: usize,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            start_time,
            leads: seed_leads(),
            meetings: seed_meetings(),
            backend_name: ui_config.backend_name,
            product: ui_config.product,
            with_background_color: ui_config.with_background_color,
            active_tab: Tab::default(),
            industry_query: truncate_query(&ui_config.default_industry),
            editing_query: false,
            report: None,
            intel_loading: false,
            intel_ticket: 0,
            selected_lead: None,
            script: None,
            script_generating: false,
            pitch_ticket: 0,
            notice: None,
            pipeline_cursor: 0,
            copilot_cursor: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn industry_query(&self) -> &str {
        &self.industry_query
    }

    pub fn report(&self) -> Option<&IntelligenceReport> {
        self.report.as_ref()
    }

    pub fn intel_loading(&self) -> bool {
        self.intel_loading
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.selected_lead.as_ref()
    }

    pub fn script(&self) -> Option<&GeneratedScript> {
        self.script.as_ref()
    }

    pub fn script_generating(&self) -> bool {
        self.script_generating
    }

    pub fn notice(&self) -> Option<&FailureNotice> {
        self.notice.as_ref()
    }

    // Navigation

    /// Switch tabs. Entering the intelligence tab with no report and nothing
    /// in flight starts a scan, which the caller must dispatch.
    pub fn select_tab(&mut self, tab: Tab) -> Option<IntelRequest> {
        self.active_tab = tab;
        self.editing_query = false;
        if tab == Tab::Intelligence && self.report.is_none() && !self.intel_loading {
            return self.begin_scan();
        }
        None
    }

    pub fn select_lead(&mut self, lead: Lead, origin: SelectionOrigin) {
        self.selected_lead = Some(lead);
        if origin.switches_to_copilot() {
            self.active_tab = Tab::Copilot;
            self.editing_query = false;
        }
    }

    pub fn recommended_lead(&self) -> Option<&Lead> {
        find_lead(&self.leads, RECOMMENDED_LEAD_ID)
    }

    /// "Draft Outreach": select the recommended lead and open the copilot.
    pub fn take_recommended_action(&mut self) {
        if let Some(lead) = self.recommended_lead().cloned() {
            self.select_lead(lead, SelectionOrigin::Recommendation);
        }
    }

    /// Select the lead under the cursor of the current tab.
    pub fn select_lead_at_cursor(&mut self) {
        let (index, origin) = match self.active_tab {
            Tab::Pipeline => (self.pipeline_cursor, SelectionOrigin::Pipeline),
            Tab::Copilot => (self.copilot_cursor, SelectionOrigin::Copilot),
            Tab::Intelligence => return,
        };
        if let Some(lead) = self.leads.get(index).cloned() {
            self.select_lead(lead, origin);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.leads.len();
        if len == 0 {
            return;
        }
        let cursor = match self.active_tab {
            Tab::Pipeline => &mut self.pipeline_cursor,
            Tab::Copilot => &mut self.copilot_cursor,
            Tab::Intelligence => return,
        };
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    // Industry query

    pub fn set_industry_query(&mut self, query: &str) {
        self.industry_query = truncate_query(query);
    }

    pub fn push_query_char(&mut self, c: char) {
        if self.industry_query.chars().count() < MAX_QUERY_LEN {
            self.industry_query.push(c);
        }
    }

    pub fn pop_query_char(&mut self) {
        self.industry_query.pop();
    }

    // Market intelligence flow

    /// Start a market scan for the current query.
    ///
    /// No-op while a scan is in flight or when the query is blank.
    pub fn begin_scan(&mut self) -> Option<IntelRequest> {
        let industry = self.industry_query.trim();
        if self.intel_loading || industry.is_empty() {
            return None;
        }
        let industry = industry.to_string();
        self.intel_ticket += 1;
        self.intel_loading = true;
        self.clear_notice_for(Flow::MarketScan);
        Some(IntelRequest {
            ticket: self.intel_ticket,
            industry,
        })
    }

    /// Abandon the scan in flight. Its completion, if it still arrives, is ignored.
    pub fn cancel_scan(&mut self) -> bool {
        if !self.intel_loading {
            return false;
        }
        self.intel_ticket += 1;
        self.intel_loading = false;
        true
    }

    /// Apply a finished scan. Returns false when the completion is stale.
    pub fn apply_intel_result(
        &mut self,
        ticket: u64,
        result: Result<IntelligenceReport, String>,
    ) -> bool {
        if ticket != self.intel_ticket || !self.intel_loading {
            return false;
        }
        self.intel_loading = false;
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.clear_notice_for(Flow::MarketScan);
            }
            Err(message) => {
                self.notice = Some(FailureNotice {
                    flow: Flow::MarketScan,
                    message,
                });
            }
        }
        true
    }

    // Pitch flow

    /// Start generating a script for the selected lead.
    ///
    /// No-op without a selected lead or while a script is being generated.
    pub fn begin_pitch(&mut self) -> Option<PitchRequest> {
        if self.script_generating {
            return None;
        }
        let lead = self.selected_lead.as_ref()?;
        let request = PitchRequest {
            ticket: self.pitch_ticket + 1,
            lead_id: lead.id.clone(),
            lead_context: lead.pitch_context(),
            product: self.product.clone(),
        };
        self.pitch_ticket = request.ticket;
        self.script_generating = true;
        self.clear_notice_for(Flow::Pitch);
        Some(request)
    }

    /// Apply a finished pitch. Returns false when the completion is stale.
    pub fn apply_script_result(
        &mut self,
        ticket: u64,
        lead_id: &str,
        result: Result<SalesScript, String>,
    ) -> bool {
        if ticket != self.pitch_ticket || !self.script_generating {
            return false;
        }
        self.script_generating = false;
        match result {
            Ok(script) => {
                self.script = Some(GeneratedScript {
                    lead_id: lead_id.to_string(),
                    script,
                });
                self.clear_notice_for(Flow::Pitch);
            }
            Err(message) => {
                self.notice = Some(FailureNotice {
                    flow: Flow::Pitch,
                    message,
                });
            }
        }
        true
    }

    /// The displayed script was written for a different lead than the selected one.
    pub fn script_is_stale(&self) -> bool {
        match (&self.script, &self.selected_lead) {
            (Some(script), Some(lead)) => script.lead_id != lead.id,
            _ => false,
        }
    }

    /// Lead the displayed script was written for.
    pub fn script_lead(&self) -> Option<&Lead> {
        let script = self.script.as_ref()?;
        find_lead(&self.leads, &script.lead_id)
    }

    // Notices and logs

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    fn clear_notice_for(&mut self, flow: Flow) {
        if self.notice.as_ref().is_some_and(|n| n.flow == flow) {
            self.notice = None;
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}

fn truncate_query(query: &str) -> String {
    query.chars().take(MAX_QUERY_LEN).collect()
}
