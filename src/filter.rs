use dialoguer::MultiSelect;

use crate::schedule::models::CourseMeeting;

const DISCLAIMER: &str = "(SPACE to toggle, ENTER to confirm)";

/// Let the user drop courses before the export
pub fn meetings(meetings: Vec<CourseMeeting>) -> Vec<CourseMeeting> {
    // One entry per course id, keeping the schedule order
    let mut courses: Vec<(String, String)> = vec![];
    for meeting in &meetings {
        if !courses.iter().any(|(id, _)| *id == meeting.id) {
            courses.push((
                meeting.id.clone(),
                format!("{} - {}", meeting.id, meeting.title),
            ));
        }
    }

    let labels: Vec<&String> = courses.iter().map(|(_, label)| label).collect();
    let defaults = vec![true; labels.len()];
    let selections = MultiSelect::new()
        .with_prompt(format!("Pick your courses {DISCLAIMER}"))
        .items(&labels[..])
        .defaults(&defaults[..])
        .interact()
        .unwrap();

    let kept: Vec<&String> = selections.iter().map(|i| &courses[*i].0).collect();

    meetings
        .into_iter()
        .filter(|meeting| kept.contains(&&meeting.id))
        .collect()
}
