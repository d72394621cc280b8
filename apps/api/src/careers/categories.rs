use std::collections::BTreeMap;

/// Reference career paths, grouped by field. Served as-is by /api/career-categories.
const SAMPLE_CAREERS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "Software Developer",
            "Data Scientist",
            "UX Designer",
            "Cybersecurity Specialist",
        ],
    ),
    (
        "healthcare",
        &[
            "Nurse",
            "Physician Assistant",
            "Medical Technologist",
            "Healthcare Administrator",
        ],
    ),
    (
        "business",
        &[
            "Marketing Manager",
            "Financial Analyst",
            "Human Resources Specialist",
            "Management Consultant",
        ],
    ),
    (
        "creative",
        &[
            "Graphic Designer",
            "Content Writer",
            "Video Producer",
            "UI/UX Designer",
        ],
    ),
];

pub fn career_categories() -> BTreeMap<String, Vec<String>> {
    SAMPLE_CAREERS
        .iter()
        .map(|(category, careers)| {
            (
                category.to_string(),
                careers.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_categories_of_four() {
        let categories = career_categories();
        assert_eq!(categories.len(), 4);
        assert!(categories.values().all(|careers| careers.len() == 4));
        assert!(categories["healthcare"].contains(&"Nurse".to_string()));
    }
}
