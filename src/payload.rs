use crate::error::WalkError;
use chrono::{Local, NaiveDate};

const DATE_PLACEHOLDER: &str = "__date__";
const STEP_PLACEHOLDER: &str = "__ttl__";

/// Percent-escaped `data_json` for one day of band data. `__date__` and
/// `__ttl__` are filled in before unescaping.
pub const DATA_JSON_TEMPLATE: &str = "%5B%7B%22data_hr%22%3A%22%2F%2F%2F%2F%2F%2F9L%2F%2F%2F%2F%2F%2F%2F%2F%2F%2F%2F%2FVv%2F%2\
F%2Fv7%2B%2Fv7%2B%2Fv7%2B%22%2C%22date%22%3A%22__date__%22%2C%22data%22%3A%5B%7B%22start\
%22%3A0%2C%22stop%22%3A1439%2C%22value%22%3A%22UA8AUBQAUAwAUBoAUAEAYCcAUBkAUB4AUBgAUCAAU\
AEAUBkAUAwAYAsAYB8AYB0AYBgAYCoAYBgAYB4AUCcAUBsAUB8AUBwAUBIAYBkAYB8AUBoAUBMAUCEAUCIAYBYAU\
BwAUCAAUBgAUCAAUBcAYBsAYCUAATIPYD0KECQAYDMAYB0AYAsAYCAAYDwAYCIAYB0AYBcAYCQAYB0AYBAAYCMAY\
AoAYCIAYCEAYCYAYBsAYBUAYAYAYCIAYCMAUB0AUCAAUBYAUCoAUBEAUC8AUB0AUBYAUDMAUDoAUBkAUC0AUBQAU\
BwAUA0AUBsAUAoAUCEAUBYAUAwAUB4AUAwAUCcAUCYAUCwKYDUAAUUlEC8IYEMAYEgAYDoAYBAAUAMAUBkAWgAAW\
gAAWgAAWgAAWgAAUAgAWgAAUBAAUAQAUA4AUA8AUAkAUAIAUAYAUAcAUAIAWgAAUAQAUAkAUAEAUBkAUCUAWgAAU\
AYAUBEAWgAAUBYAWgAAUAYAWgAAWgAAWgAAWgAAUBcAUAcAWgAAUBUAUAoAUAIAWgAAUAQAUAYAUCgAWgAAUAgAW\
gAAWgAAUAwAWwAAXCMAUBQAWwAAUAIAWgAAWgAAWgAAWgAAWgAAWgAAWgAAWgAAWREAWQIAUAMAWSEAUDoAUDIAU\
B8AUCEAUC4AXB4AUA4AWgAAUBIAUA8AUBAAUCUAUCIAUAMAUAEAUAsAUAMAUCwAUBYAWgAAWgAAWgAAWgAAWgAAW\
gAAUAYAWgAAWgAAWgAAUAYAWwAAWgAAUAYAXAQAUAMAUBsAUBcAUCAAWwAAWgAAWgAAWgAAWgAAUBgAUB4AWgAAU\
AcAUAwAWQIAWQkAUAEAUAIAWgAAUAoAWgAAUAYAUB0AWgAAWgAAUAkAWgAAWSwAUBIAWgAAUC4AWSYAWgAAUAYAU\
AoAUAkAUAIAUAcAWgAAUAEAUBEAUBgAUBcAWRYAUA0AWSgAUB4AUDQAUBoAXA4AUA8AUBwAUA8AUA4AUA4AWgAAU\
AIAUCMAWgAAUCwAUBgAUAYAUAAAUAAAUAAAUAAAUAAAUAAAUAAAUAAAUAAAWwAAUAAAcAAAcAAAcAAAcAAAcAAAc\
AAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAc\
AAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAc\
AAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAc\
AAAcAAAcAAAcAAAcAAAcAAAcAAAcAAAcAAA%22%2C%22tz%22%3A32%2C%22did%22%3A%22DA932FFFFE8888E7\
%22%2C%22src%22%3A24%7D%5D%2C%22summary%22%3A%22%7B%5C%22v%5C%22%3A6%2C%5C%22slp%5C%22%3\
A%7B%5C%22st%5C%22%3A1628296479%2C%5C%22ed%5C%22%3A1628296479%2C%5C%22dp%5C%22%3A0%2C%5C\
%22lt%5C%22%3A0%2C%5C%22wk%5C%22%3A0%2C%5C%22usrSt%5C%22%3A-1440%2C%5C%22usrEd%5C%22%3A-\
1440%2C%5C%22wc%5C%22%3A0%2C%5C%22is%5C%22%3A0%2C%5C%22lb%5C%22%3A0%2C%5C%22to%5C%22%3A0\
%2C%5C%22dt%5C%22%3A0%2C%5C%22rhr%5C%22%3A0%2C%5C%22ss%5C%22%3A0%7D%2C%5C%22stp%5C%22%3A\
%7B%5C%22ttl%5C%22%3A__ttl__%2C%5C%22dis%5C%22%3A10627%2C%5C%22cal%5C%22%3A510%2C%5C%22w\
k%5C%22%3A41%2C%5C%22rn%5C%22%3A50%2C%5C%22runDist%5C%22%3A7654%2C%5C%22runCal%5C%22%3A3\
97%2C%5C%22stage%5C%22%3A%5B%5D%7D%2C%5C%22goal%5C%22%3A8000%2C%5C%22tz%5C%22%3A%5C%2228\
800%5C%22%7D%22%2C%22source%22%3A24%2C%22type%22%3A0%7D%5D";

/// One day's step count, rendered into the `data_json` form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub date: NaiveDate,
    pub step: String,
}

impl StepReport {
    pub fn new(date: NaiveDate, step: impl Into<String>) -> Self {
        StepReport {
            date,
            step: step.into(),
        }
    }

    pub fn today(step: impl Into<String>) -> Self {
        StepReport::new(Local::now().date_naive(), step)
    }

    pub fn render(&self) -> Result<String, WalkError> {
        render_template(DATA_JSON_TEMPLATE, self.date, &self.step)
    }
}

pub fn render_template(template: &str, date: NaiveDate, step: &str) -> Result<String, WalkError> {
    let filled = template
        .replace(DATE_PLACEHOLDER, &date.format("%Y-%m-%d").to_string())
        .replace(STEP_PLACEHOLDER, step);
    Ok(urlencoding::decode(&filled)?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn summary(payload: &Value) -> Value {
        let s = payload[0]["summary"].as_str().unwrap();
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn renders_date_and_step() {
        let out = StepReport::new(jan15(), "100").render().unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["date"], "2024-01-15");
        assert_eq!(summary(&v)["stp"]["ttl"], 100);
        assert!(!out.contains(DATE_PLACEHOLDER));
        assert!(!out.contains(STEP_PLACEHOLDER));
    }

    #[test]
    fn only_placeholders_change() {
        let out = StepReport::new(jan15(), "100").render().unwrap();
        let expected = urlencoding::decode(DATA_JSON_TEMPLATE)
            .unwrap()
            .replace(DATE_PLACEHOLDER, "2024-01-15")
            .replace(STEP_PLACEHOLDER, "100");
        assert_eq!(out, expected);

        let v: Value = serde_json::from_str(&out).unwrap();
        let s = summary(&v);
        assert_eq!(s["goal"], 8000);
        assert_eq!(s["stp"]["dis"], 10627);
        assert_eq!(v[0]["data"][0]["did"], "DA932FFFFE8888E7");
        assert_eq!(v[0]["source"], 24);
    }

    #[test]
    fn step_is_inserted_verbatim() {
        let out = render_template("%7B%22ttl%22%3A__ttl__%7D", jan15(), "12 34").unwrap();
        assert_eq!(out, r#"{"ttl":12 34}"#);
    }

    #[test]
    fn invalid_utf8_after_unescape_is_an_error() {
        let err = render_template("__ttl__", jan15(), "%FF").unwrap_err();
        assert!(matches!(err, WalkError::Template(_)));
    }
}
