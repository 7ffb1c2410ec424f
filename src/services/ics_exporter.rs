//! ICS calendar export.
//!
//! Serializes every domain renewal into a VEVENT of a single iCalendar
//! document. Google Calendar sync is a stub that reports "coming soon".

use chrono::NaiveDate;

use crate::types::domain::Domain;
use crate::types::errors::ExportError;

/// Suggested filename for the exported calendar.
pub const ICS_FILENAME: &str = "domain-renewals.ics";

/// Toast text for the unimplemented Google Calendar path.
pub const GOOGLE_CALENDAR_MESSAGE: &str = "Google Calendar sync feature coming soon!";

/// Builds the iCalendar document for the whole portfolio, one VEVENT per
/// domain. Exporting an empty portfolio is an error.
pub fn export_ics(domains: &[Domain]) -> Result<String, ExportError> {
    if domains.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut ics = String::from("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Domain Vault//EN\n");
    for domain in domains {
        ics.push_str("BEGIN:VEVENT\n");
        ics.push_str(&format!("UID:{}@domainvault.com\n", domain.id));
        ics.push_str(&format!("DTSTART:{}\n", ics_timestamp(&domain.renewal_date)?));
        ics.push_str(&format!("SUMMARY:Domain Renewal: {}\n", domain.name));
        ics.push_str(&format!(
            "DESCRIPTION:Renew domain {} for ${}\n",
            domain.name, domain.price
        ));
        ics.push_str("END:VEVENT\n");
    }
    ics.push_str("END:VCALENDAR");
    Ok(ics)
}

/// Renewal date at UTC midnight in the compact iCalendar form
/// (`YYYYMMDDT000000Z`).
fn ics_timestamp(renewal_date: &str) -> Result<String, ExportError> {
    let date = NaiveDate::parse_from_str(renewal_date, "%Y-%m-%d")
        .map_err(|_| ExportError::InvalidDate(renewal_date.to_string()))?;
    Ok(format!("{}T000000Z", date.format("%Y%m%d")))
}
