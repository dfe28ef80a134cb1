//! Sample roster for first runs
//!
//! Used when no roster file exists yet and `seedSampleData` is on, so a new
//! user has something to list, find and mark straight away.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::result::Result;
use crate::domain::{Email, Name, Person, Phone, StudentId, Tag, Tutorial};
use crate::model::Roster;

struct SampleStudent {
    name: &'static str,
    student_id: &'static str,
    phone: &'static str,
    email: &'static str,
    tags: &'static [&'static str],
    /// (tutorial, present)
    attendance: &'static [(u8, bool)],
}

const SAMPLE_STUDENTS: &[SampleStudent] = &[
    SampleStudent {
        name: "Alex Yeoh",
        student_id: "A0123456X",
        phone: "87438807",
        email: "alexyeoh@example.com",
        tags: &["friends"],
        attendance: &[(1, true), (2, true)],
    },
    SampleStudent {
        name: "Bernice Yu",
        student_id: "A0234567Y",
        phone: "99272758",
        email: "berniceyu@example.com",
        tags: &["colleagues", "friends"],
        attendance: &[(1, true), (2, false)],
    },
    SampleStudent {
        name: "Charlotte Oliveiro",
        student_id: "A0345678Z",
        phone: "93210283",
        email: "charlotte@example.com",
        tags: &["neighbours"],
        attendance: &[],
    },
    SampleStudent {
        name: "David Li",
        student_id: "A0456789W",
        phone: "91031282",
        email: "lidavid@example.com",
        tags: &["family"],
        attendance: &[(1, false)],
    },
    SampleStudent {
        name: "Irfan Ibrahim",
        student_id: "A0567890V",
        phone: "92492021",
        email: "irfan@example.com",
        tags: &["classmates"],
        attendance: &[(1, true)],
    },
    SampleStudent {
        name: "Roy Balakrishnan",
        student_id: "A0678901U",
        phone: "92624417",
        email: "royb@example.com",
        tags: &["colleagues"],
        attendance: &[],
    },
];

/// Build the sample persons
pub fn sample_persons() -> Result<Vec<Person>> {
    SAMPLE_STUDENTS.iter().map(to_person).collect()
}

pub fn sample_roster() -> Result<Roster> {
    Ok(Roster::from_persons(sample_persons()?))
}

fn to_person(sample: &SampleStudent) -> Result<Person> {
    let tags = sample
        .tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<BTreeSet<_>>>()?;
    let tutorials = sample
        .attendance
        .iter()
        .map(|(number, present)| Tutorial::new(*number).map(|t| (t, *present)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Person::new(
        Name::new(sample.name)?,
        StudentId::new(sample.student_id)?,
        Phone::new(sample.phone)?,
        Email::new(sample.email)?,
        tags,
        tutorials,
    ))
}
