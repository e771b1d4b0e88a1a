use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use ics::properties::{Description, DtEnd, DtStart, RRule, Summary};
use ics::{escape_text, Event, ICalendar};
use regex::Regex;

use crate::error::{ExportError, Result};
use crate::schedule::models::CourseMeeting;
use crate::utils::{day_index, is_daily, DAY_CODES};

const PRODID: &str = "-//PSUT Schedule Exporter//EN";

/// iCalendar basic format, UTC
const DT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Build the calendar, one recurring event per (meeting, resolved day).
/// `now` anchors every recurrence, pass the same value to get the same
/// calendar back.
pub fn build(meetings: &[CourseMeeting], now: DateTime<Utc>) -> Result<ICalendar<'static>> {
    let mut calendar = ICalendar::new("2.0", PRODID);
    let dtstamp = now.format(DT_FORMAT).to_string();
    let today = now.date_naive();

    for meeting in meetings {
        let (start, end) = parse_time(&meeting.time)?;

        if is_daily(&meeting.days) {
            let uid = format!("{}-{}-DAILY", meeting.id, meeting.section);
            calendar.add_event(event(
                uid,
                &dtstamp,
                today.and_time(start).and_utc(),
                today.and_time(end).and_utc(),
                "FREQ=DAILY".to_owned(),
                meeting,
            ));
            continue;
        }

        let multi_day = meeting.days.split_whitespace().count() > 1;
        for token in meeting.days.split_whitespace() {
            // Tokens the portal vocabularies don't know produce no event
            let Some(index) = day_index(token, multi_day) else {
                continue;
            };

            // Next occurrence of the weekday, today included
            let ahead = (index + 7 - now.weekday().num_days_from_sunday() as usize) % 7;
            let date = today + Duration::days(ahead as i64);

            let uid = format!("{}-{}-{}", meeting.id, meeting.section, DAY_CODES[index]);
            calendar.add_event(event(
                uid,
                &dtstamp,
                date.and_time(start).and_utc(),
                date.and_time(end).and_utc(),
                format!("FREQ=WEEKLY;BYDAY={}", DAY_CODES[index]),
                meeting,
            ));
        }
    }

    Ok(calendar)
}

/// Write the calendar next to the user, appending `.ics` when missing
pub fn export(calendar: &ICalendar, filename: &mut String) -> Result<()> {
    if !filename.ends_with(".ics") {
        filename.push_str(".ics");
    }

    calendar.save_file(filename.as_str())?;

    Ok(())
}

/// One VEVENT of a meeting
fn event(
    uid: String,
    dtstamp: &str,
    dtstart: DateTime<Utc>,
    dtend: DateTime<Utc>,
    rule: String,
    meeting: &CourseMeeting,
) -> Event<'static> {
    let summary = if meeting.is_online {
        meeting.title.clone()
    } else {
        format!("[{}] {}", meeting.classroom, meeting.title)
    };
    let description = format!(
        "{}, {}, section {}, {}, {}",
        meeting.title, meeting.id, meeting.section, meeting.classroom, meeting.instructor
    );

    let mut event = Event::new(uid, dtstamp.to_owned());
    event.push(DtStart::new(dtstart.format(DT_FORMAT).to_string()));
    event.push(DtEnd::new(dtend.format(DT_FORMAT).to_string()));
    event.push(RRule::new(rule));
    event.push(Summary::new(escape_text(summary)));
    event.push(Description::new(escape_text(description)));

    event
}

/// Split the `time` column into start and end of the meeting
fn parse_time(time: &str) -> Result<(NaiveTime, NaiveTime)> {
    // h1 => start hour | m1 => start minute
    // h2 => end hour   | m2 => end minute
    let re = Regex::new(r"^(?P<h1>\d{1,2}):(?P<m1>\d{2})\s+(?P<h2>\d{1,2}):(?P<m2>\d{2})$")
        .unwrap();

    let malformed = || ExportError::MalformedTimeFormat(time.to_owned());

    let captures = re.captures(time.trim()).ok_or_else(malformed)?;
    // The groups are plain digits, they always parse
    let field = |name| captures.name(name).unwrap().as_str().parse().unwrap();

    let start = NaiveTime::from_hms_opt(field("h1"), field("m1"), 0).ok_or_else(malformed)?;
    let end = NaiveTime::from_hms_opt(field("h2"), field("m2"), 0).ok_or_else(malformed)?;

    Ok((start, end))
}
