//! Requests the dashboard hands to the dispatcher.

/// Market scan issued under `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntelRequest {
    pub ticket: u64,
    pub industry: String,
}

/// Sales script for one lead, issued under `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchRequest {
    pub ticket: u64,
    pub lead_id: String,
    /// `"{name} from {company} in the {industry} sector"`
    pub lead_context: String,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRequest {
    pub objective: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Scan(IntelRequest),
    /// Abort the scan in flight, if any.
    CancelScan,
    Pitch(PitchRequest),
    Campaign(CampaignRequest),
}

impl From<IntelRequest> for Request {
    fn from(request: IntelRequest) -> Self {
        Request::Scan(request)
    }
}

impl From<PitchRequest> for Request {
    fn from(request: PitchRequest) -> Self {
        Request::Pitch(request)
    }
}

impl From<CampaignRequest> for Request {
    fn from(request: CampaignRequest) -> Self {
        Request::Campaign(request)
    }
}
