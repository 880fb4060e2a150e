/// Student category, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Domestic,
    International,
}

/// One roster record
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    // 3-letter month code, e.g. "Jan"; no calendar validation
    pub birth_month: String,
    pub birth_day: u32,
    pub birth_year: i32,
    pub gpa: f64,
    pub category: Category,
    // None means "no score"; always None for Domestic
    pub toefl: Option<u32>,
}

impl Student {
    pub fn new(
        first_name: String,
        last_name: String,
        birth_month: String,
        birth_day: u32,
        birth_year: i32,
        gpa: f64,
        category: Category,
        toefl: Option<u32>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            birth_month,
            birth_day,
            birth_year,
            gpa,
            category,
            toefl,
        }
    }
}
