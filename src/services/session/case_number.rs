use uuid::Uuid;

/// Source of fresh case numbers
pub trait CaseNumberSource {
    fn next_case_number(&mut self) -> String;
}

/// Random UUID v4 case numbers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidCaseNumbers;

impl CaseNumberSource for UuidCaseNumbers {
    fn next_case_number(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable case numbers (`case-1`, `case-2`, ...) for tests and demos
#[derive(Debug, Default, Clone)]
pub struct SequentialCaseNumbers {
    next: u64,
}

impl CaseNumberSource for SequentialCaseNumbers {
    fn next_case_number(&mut self) -> String {
        self.next += 1;
        format!("case-{}", self.next)
    }
}
