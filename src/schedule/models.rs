use serde::{Deserialize, Deserializer};

/// One course/section row of the portal's schedule table
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMeeting {
    /// Course identifier
    pub id: String,

    /// Course name
    pub title: String,

    /// Section number, a bare number in some portal revisions
    #[serde(deserialize_with = "section")]
    pub section: String,

    /// Instructor's name
    pub instructor: String,

    /// Room label, meaningless for online courses
    pub classroom: String,

    /// Either the daily marker, one full weekday name, or
    /// space-separated weekday abbreviations
    pub days: String,

    /// "HH:MM HH:MM", start then end of the meeting
    pub time: String,

    pub is_online: bool,
}

/// Accept the section both as a JSON string and as a JSON number
fn section<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Section {
        Number(i64),
        Text(String),
    }

    Ok(match Section::deserialize(deserializer)? {
        Section::Number(n) => n.to_string(),
        Section::Text(s) => s,
    })
}
