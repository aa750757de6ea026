//! Fixed subject and topic catalogue used by the rotating archetypes
//!
//! Order matters: rotation indexes into these slices, so reordering or
//! inserting entries reshuffles every generated schedule.

/// A subject and its ordered topics
#[derive(Debug, Clone)]
pub struct Subject {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// All subjects in rotation order
pub static SUBJECTS: &[Subject] = &[
    Subject {
        name: "History",
        topics: &[
            "Ancient India",
            "Medieval India",
            "Modern India",
            "Freedom Struggle",
            "Art & Culture",
        ],
    },
    Subject {
        name: "Geography",
        topics: &[
            "Physical Geography",
            "Indian Geography",
            "World Geography",
            "Climatology",
        ],
    },
    Subject {
        name: "Polity",
        topics: &[
            "Constitution",
            "Parliament",
            "Judiciary",
            "Local Governance",
            "Constitutional Bodies",
        ],
    },
    Subject {
        name: "Economy",
        topics: &[
            "Banking",
            "Fiscal Policy",
            "External Sector",
            "Agriculture",
        ],
    },
    Subject {
        name: "Environment",
        topics: &["Ecology", "Biodiversity", "Climate Change"],
    },
    Subject {
        name: "Science & Technology",
        topics: &[
            "Space",
            "Biotechnology",
            "Defence",
            "IT & Computers",
        ],
    },
    Subject {
        name: "Current Affairs",
        topics: &["National", "International", "Schemes"],
    },
];

/// Subject for a rotation position: `position mod subject_count`
pub fn subject_at(position: i64) -> &'static Subject {
    &SUBJECTS[position.rem_euclid(SUBJECTS.len() as i64) as usize]
}

/// Topic for a rotation position within the chosen subject:
/// `floor(position / subject_count) mod topic_count`
pub fn topic_at(subject: &'static Subject, position: i64) -> &'static str {
    let cycle = position.div_euclid(SUBJECTS.len() as i64);
    subject.topics[cycle.rem_euclid(subject.topics.len() as i64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_rotation_wraps() {
        let count = SUBJECTS.len() as i64;
        assert_eq!(subject_at(0).name, "History");
        assert_eq!(subject_at(count).name, "History");
        assert_eq!(subject_at(count + 2).name, "Polity");
    }

    #[test]
    fn test_topic_advances_once_per_full_subject_cycle() {
        let count = SUBJECTS.len() as i64;
        let history = subject_at(0);
        assert_eq!(topic_at(history, 0), "Ancient India");
        assert_eq!(topic_at(history, count), "Medieval India");
        assert_eq!(topic_at(history, count * 5), "Ancient India");
    }

    #[test]
    fn test_every_subject_has_topics() {
        assert!(SUBJECTS.iter().all(|s| !s.topics.is_empty()));
        assert!(SUBJECTS.len() >= 3, "rapid fire needs three distinct subjects");
    }
}
