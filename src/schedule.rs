use std::fs;

use crate::error::Result;

pub mod models;

/// Read the schedule rows from a JSON file
pub fn load(path: &str) -> Result<Vec<models::CourseMeeting>> {
    parse(&fs::read_to_string(path)?)
}

/// Parse the scraper's JSON output, keeping the row order of the portal
pub fn parse(json: &str) -> Result<Vec<models::CourseMeeting>> {
    Ok(serde_json::from_str(json)?)
}

/// Display the schedule
pub fn display(meetings: &[models::CourseMeeting]) {
    println!(
        "{:<10} {:<32} {:^7} {:<14} {:<13} {}",
        "Id", "Title", "Section", "Days", "Time", "Room"
    );

    for meeting in meetings {
        let room = if meeting.is_online {
            "Online"
        } else {
            meeting.classroom.as_str()
        };

        println!(
            "{:<10} {:<32} {:^7} {:<14} {:<13} {}",
            meeting.id, meeting.title, meeting.section, meeting.days, meeting.time, room
        );
    }
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn parse_keeps_row_order() {
        let rows = parse(
            r#"[
                {"id": "11101", "title": "Calculus I", "section": "2",
                 "instructor": "Dr. Smith", "classroom": "305",
                 "days": "Sun Tues", "time": "08:00 09:30", "isOnline": false},
                {"id": "22204", "title": "Data Structures", "section": "1",
                 "instructor": "Dr. Haddad", "classroom": "IT-12",
                 "days": "Monday", "time": "10:00 11:00", "isOnline": false}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "11101");
        assert_eq!(rows[1].id, "22204");
    }

    #[test]
    fn parse_accepts_numeric_section() {
        let rows = parse(
            r#"[{"id": "11101", "title": "Calculus I", "section": 2,
                 "instructor": "Dr. Smith", "classroom": "305",
                 "days": "Sunday", "time": "08:00 09:30", "isOnline": true}]"#,
        )
        .unwrap();

        assert_eq!(rows[0].section, "2");
        assert!(rows[0].is_online);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("not a schedule").is_err());
    }
}
