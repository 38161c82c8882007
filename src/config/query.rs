/// Query parameters for one course listing request.
///
/// Replaces the attribute-style accessors of the upstream crawler with an
/// explicit struct whose setters keep the zero-padding invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    department: String,
    year: String,
    semester: String,
}

impl CourseQuery {
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            year: String::new(),
            semester: String::new(),
        }
    }

    pub fn with_term(department: impl Into<String>, year: &str, semester: &str) -> Self {
        let mut query = Self::new(department);
        query.set_year(year);
        query.set_semester(semester);
        query
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Academic years are sent zero-padded to four digits ("103" becomes
    /// "0103"); an empty string clears the year.
    pub fn set_year(&mut self, year: &str) {
        self.year = if year.is_empty() {
            String::new()
        } else {
            format!("{:0>4}", year)
        };
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn set_semester(&mut self, semester: impl Into<String>) {
        self.semester = semester.into();
    }

    /// True when the query names an explicit year and semester.
    pub fn is_term_query(&self) -> bool {
        !self.year.is_empty() && !self.semester.is_empty()
    }

    /// Query-string pairs in the order the endpoint expects.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("syear", self.year.as_str()),
            ("sem", self.semester.as_str()),
            ("dept_no", self.department.as_str()),
        ]
    }
}
