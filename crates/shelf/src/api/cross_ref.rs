use log::{info, trace};
use serde::Deserialize;

use crate::{identifier::Issn, record::RawPeriodicalRecord, Error};

use super::Client;

const CROSS_REF_JOURNALS_URL: &str = "https://api.crossref.org/journals/";

#[derive(Deserialize)]
struct JournalResponse {
    message: RawPeriodicalRecord,
}

pub(crate) fn get_periodical_by_issn<C: Client>(issn: &str) -> Result<RawPeriodicalRecord, Error> {
    let issn = Issn::parse(issn)?;
    info!("Searching for ISSN '{issn}' using the Crossref journals API");

    let url = format!("{CROSS_REF_JOURNALS_URL}{issn}");
    let client = C::default();
    let JournalResponse { message } = client.get_json(&url)?;

    trace!("Request was successful");
    Ok(message)
}
