/// Source column → output column, in output order. The source side is the
/// LCA disclosure schema; every entry is required in each input file.
pub static COLUMN_MAP: &[(&str, &str)] = &[
    ("EMPLOYER_NAME", "Employer Name"),
    ("JOB_TITLE", "Job Title"),
    ("SOC_TITLE", "SOC Title"),
    ("WAGE_RATE_OF_PAY_FROM", "Wage Rate of Pay From"),
    ("WAGE_RATE_OF_PAY_TO", "Wage Rate of Pay To"),
    ("WAGE_UNIT_OF_PAY", "Wage Unit of Pay"),
    ("PREVAILING_WAGE", "Prevailing Wage"),
    ("PW_WAGE_LEVEL", "PW Wage Level"),
    ("EMPLOYER_ADDRESS1", "Employer Address 1"),
    ("EMPLOYER_CITY", "Employer City"),
    ("EMPLOYER_STATE", "Employer State"),
    ("EMPLOYER_POSTAL_CODE", "Employer Postal Code"),
    ("WORKSITE_CITY", "Worksite City"),
    ("WORKSITE_COUNTY", "Worksite County"),
    ("WORKSITE_STATE", "Worksite State"),
    ("WORKSITE_POSTAL_CODE", "Worksite Postal Code"),
    ("RECEIVED_DATE", "Received Date"),
    ("DECISION_DATE", "Decision Date"),
    ("VISA_CLASS", "Visa Class"),
    ("BEGIN_DATE", "Employment Start Date"),
    ("END_DATE", "Employment End Date"),
    ("CASE_STATUS", "Case Status"),
];

/// The job-title column every input must carry.
pub const TITLE_COLUMN: &str = "JOB_TITLE";

/// The source columns, in mapping order.
pub fn source_columns() -> Vec<&'static str> {
    COLUMN_MAP.iter().map(|(from, _)| *from).collect()
}
