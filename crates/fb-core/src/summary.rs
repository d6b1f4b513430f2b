//! Projection of an [`Event`] printed after a fetch.
//!
//! Keys are PascalCase to match the report operators already read.

use serde::Serialize;

use crate::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventSummary {
    pub group: String,
    #[serde(rename = "Type")]
    pub event_type: String,
    pub message: String,
    pub author: AuthorSummary,
    pub params: ParamsSummary,
    pub period: PeriodSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "MoID")]
    pub mo_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamsSummary {
    #[serde(rename = "IndicatorToMoID")]
    pub indicator_to_mo_id: i64,
    #[serde(rename = "Platform")]
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "TypeID")]
    pub type_id: i64,
    #[serde(rename = "TypeKey")]
    pub type_key: String,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        let period = &event.params.period;
        Self {
            group: event.group.clone(),
            event_type: event.event_type.clone(),
            message: event.msg.clone(),
            author: AuthorSummary {
                user_id: event.author.user_id,
                user_name: event.author.user_name.clone(),
                mo_id: event.author.mo_id,
            },
            params: ParamsSummary {
                indicator_to_mo_id: event.params.indicator_to_mo_id,
                platform: event.params.platform.clone(),
            },
            period: PeriodSummary {
                start: period.start.clone(),
                end: period.end.clone(),
                type_id: period.type_id,
                type_key: period.type_key.clone(),
            },
        }
    }
}
