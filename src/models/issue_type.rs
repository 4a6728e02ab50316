use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_type_deserialization() {
        let json_data = json!({
            "id": "1",
            "name": "Bug",
            "self": "https://example.atlassian.net/rest/api/3/issuetype/1",
            "subtask": false
        });

        let issue_type: IssueType = serde_json::from_value(json_data).unwrap();

        assert_eq!(issue_type, IssueType { name: "Bug".to_string() });
    }
}
