mod petitioner;
mod respondent;
pub mod views;

pub use petitioner::{build_petitioner_profile, TOP_TARGETS};
pub use respondent::{build_respondent_report, zero_state_report, TOP_PETITIONERS};
pub use views::{
    PetitionerCaseView, PetitionerProfile, PetitionerStats, RespondentCaseView,
    RespondentReport, RespondentStats, RISK_NOTE,
};
