#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Undergraduate,
    Postgraduate,
}

impl Level {
    pub fn code(self) -> &'static str {
        match self {
            Level::Undergraduate => "UG",
            Level::Postgraduate => "PG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Engineering,
    Management,
    Arts,
}

impl Department {
    /// Order of the groups in the course select.
    pub const ALL: [Department; 3] = [
        Department::Engineering,
        Department::Management,
        Department::Arts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Management => "Management",
            Department::Arts => "Arts",
        }
    }
}

/// A program applicants can choose on the admission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub id: u32,
    pub title: &'static str,
    pub department: Department,
    pub duration: &'static str,
    pub level: Level,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        id: 1,
        title: "B.Tech Computer Science",
        department: Department::Engineering,
        duration: "4 Years",
        level: Level::Undergraduate,
    },
    Program {
        id: 2,
        title: "B.Tech Mechanical Engineering",
        department: Department::Engineering,
        duration: "4 Years",
        level: Level::Undergraduate,
    },
    Program {
        id: 3,
        title: "BCA (Computer Applications)",
        department: Department::Engineering,
        duration: "3 Years",
        level: Level::Undergraduate,
    },
    Program {
        id: 4,
        title: "BBA (Business Administration)",
        department: Department::Management,
        duration: "3 Years",
        level: Level::Undergraduate,
    },
    Program {
        id: 5,
        title: "B.Sc in Hospitality Studies",
        department: Department::Arts,
        duration: "3 Years",
        level: Level::Undergraduate,
    },
    Program {
        id: 6,
        title: "MBA – General Management",
        department: Department::Management,
        duration: "2 Years",
        level: Level::Postgraduate,
    },
    Program {
        id: 7,
        title: "MCA (Computer Applications)",
        department: Department::Engineering,
        duration: "2 Years",
        level: Level::Postgraduate,
    },
    Program {
        id: 8,
        title: "M.Tech in Computer Science",
        department: Department::Engineering,
        duration: "2 Years",
        level: Level::Postgraduate,
    },
];

/// Looks a program up by the id submitted from the course select.
pub fn find_program(id: &str) -> Option<&'static Program> {
    let id: u32 = id.trim().parse().ok()?;
    PROGRAMS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = PROGRAMS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROGRAMS.len());
    }

    #[test]
    fn test_every_program_is_in_a_listed_department() {
        for program in PROGRAMS {
            assert!(Department::ALL.contains(&program.department));
        }
        for department in Department::ALL {
            assert!(PROGRAMS.iter().any(|p| p.department == department));
        }
    }

    #[test]
    fn test_level_derived_from_program() {
        assert_eq!(find_program("3").unwrap().level.code(), "UG");
        assert_eq!(find_program(" 6 ").unwrap().level.code(), "PG");
    }

    #[test]
    fn test_unknown_program() {
        assert!(find_program("99").is_none());
        assert!(find_program("").is_none());
        assert!(find_program("bca").is_none());
    }
}
