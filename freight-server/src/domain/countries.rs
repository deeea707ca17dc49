//! ISO 3166-1 alpha-2 country code to country name lookup.
//!
//! Trucking rate rows are keyed by country *name*, so segment country codes
//! have to be resolved before the rate lookup. Codes outside the table fall
//! back to the code itself rather than failing.

/// Resolve a country name from an ISO 3166-1 alpha-2 code.
///
/// Returns the code itself (uppercased) if it is not in the table.
pub fn country_name(code: &str) -> String {
    let upper = code.to_ascii_uppercase();
    match upper.as_str() {
        // Europe
        "DE" => "Germany",
        "FR" => "France",
        "ES" => "Spain",
        "IT" => "Italy",
        "NL" => "Netherlands",
        "BE" => "Belgium",
        "AT" => "Austria",
        "CH" => "Switzerland",
        "GB" => "United Kingdom",
        "IE" => "Ireland",
        "PT" => "Portugal",
        "SE" => "Sweden",
        "NO" => "Norway",
        "DK" => "Denmark",
        "FI" => "Finland",
        "PL" => "Poland",
        "CZ" => "Czech Republic",
        "SK" => "Slovakia",
        "HU" => "Hungary",
        "RO" => "Romania",
        "BG" => "Bulgaria",
        "GR" => "Greece",
        "HR" => "Croatia",
        "SI" => "Slovenia",
        "RS" => "Serbia",
        "UA" => "Ukraine",
        // Americas
        "MX" => "Mexico",
        "US" => "United States",
        "CA" => "Canada",
        "BR" => "Brazil",
        "AR" => "Argentina",
        "CL" => "Chile",
        "CO" => "Colombia",
        "PE" => "Peru",
        "VE" => "Venezuela",
        "EC" => "Ecuador",
        "UY" => "Uruguay",
        "PY" => "Paraguay",
        "BO" => "Bolivia",
        _ => return upper,
    }
    .to_string()
}
