use crate::dataset::error::ExportError;
use crate::i18n::language::UnsupportedLanguage;
use crate::selector::error::SelectorError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Language(#[from] UnsupportedLanguage),

    #[error("Date {date} is in the past (today is {today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },
}
