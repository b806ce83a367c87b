//! Aggregation properties of the epic roll-up.

use jira_mcp::jira::summary::{summarize, DONE_STATUSES};
use jira_mcp::models::Issue;
use serde_json::json;
use speculate2::speculate;

fn issue(
    key: &str,
    status: &str,
    issue_type: &str,
    priority: Option<&str>,
    assignee: Option<&str>,
) -> Issue {
    serde_json::from_value(json!({
        "id": "10000",
        "key": key,
        "fields": {
            "summary": format!("Summary for {key}"),
            "status": {"name": status},
            "issuetype": {"name": issue_type},
            "priority": priority.map(|p| json!({"name": p})),
            "assignee": assignee.map(|a| json!({"displayName": a})),
        }
    }))
    .expect("valid issue")
}

fn epic(key: &str) -> Issue {
    issue(key, "In Progress", "Epic", Some("High"), Some("Dana Scully"))
}

speculate! {
    describe "summarize" {
        it "splits done and non-done counts" {
            let children = vec![
                issue("PROJ-2", "Done", "Task", Some("High"), Some("Ana")),
                issue("PROJ-3", "In Progress", "Bug", Some("Low"), Some("Ben")),
                issue("PROJ-4", "Done", "Task", Some("Medium"), Some("Cleo")),
            ];

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.total_issues, 3);
            assert_eq!(report.done_issues, 2);
            assert_eq!(report.non_done_issues, 1);
            assert_eq!(report.non_done_tickets.len(), 1);
            assert_eq!(report.non_done_tickets[0].key, "PROJ-3");
            assert_eq!(report.non_done_tickets[0].status, "In Progress");
        }

        it "recognizes every status in the done set" {
            let children: Vec<Issue> = DONE_STATUSES
                .iter()
                .enumerate()
                .map(|(i, &status)| issue(&format!("PROJ-{i}"), status, "Task", None, None))
                .collect();
            let total = children.len();

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.done_issues, total);
            assert_eq!(report.non_done_issues, 0);
            assert!(report.non_done_tickets.is_empty());
        }

        it "treats done matching as case-sensitive" {
            let children = vec![issue("PROJ-2", "done", "Task", None, None)];

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.done_issues, 0);
            assert_eq!(report.non_done_tickets.len(), 1);
        }

        it "counts unassigned issues regardless of done state" {
            let children = vec![
                issue("PROJ-2", "Done", "Task", None, None),
                issue("PROJ-3", "In Progress", "Task", None, None),
                issue("PROJ-4", "In Progress", "Task", None, Some("Ana")),
            ];

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.unassigned_issues, 2);
        }

        it "labels missing priority as None" {
            let children = vec![
                issue("PROJ-2", "To Do", "Task", None, None),
                issue("PROJ-3", "To Do", "Task", Some("High"), None),
                issue("PROJ-4", "To Do", "Task", None, None),
            ];

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.issues_by_priority["None"], 2);
            assert_eq!(report.issues_by_priority["High"], 1);
            assert_eq!(report.non_done_tickets[0].priority, "None");
        }

        it "accumulates every grouping over all issues" {
            let children = vec![
                issue("PROJ-2", "Done", "Task", Some("High"), Some("Ana")),
                issue("PROJ-3", "In Progress", "Bug", Some("High"), None),
                issue("PROJ-4", "To Do", "Bug", None, None),
                issue("PROJ-5", "Done", "Story", Some("Low"), Some("Ben")),
            ];
            let total = children.len() as u32;

            let report = summarize(epic("PROJ-1"), children);

            assert_eq!(report.issues_by_status.values().sum::<u32>(), total);
            assert_eq!(report.issues_by_type.values().sum::<u32>(), total);
            assert_eq!(report.issues_by_priority.values().sum::<u32>(), total);
            assert_eq!(report.issues_by_status["Done"], 2);
            assert_eq!(report.issues_by_type["Bug"], 2);
        }

        it "keeps non-done tickets in input order" {
            let children = vec![
                issue("PROJ-5", "To Do", "Task", None, None),
                issue("PROJ-2", "Done", "Task", None, None),
                issue("PROJ-9", "In Progress", "Task", None, None),
                issue("PROJ-3", "Blocked", "Task", None, None),
            ];

            let report = summarize(epic("PROJ-1"), children);

            let keys: Vec<&str> = report
                .non_done_tickets
                .iter()
                .map(|t| t.key.as_str())
                .collect();
            assert_eq!(keys, ["PROJ-5", "PROJ-9", "PROJ-3"]);
        }

        it "handles an epic with no children" {
            let report = summarize(epic("PROJ-1"), vec![]);

            assert_eq!(report.total_issues, 0);
            assert_eq!(report.done_issues, 0);
            assert_eq!(report.non_done_issues, 0);
            assert_eq!(report.unassigned_issues, 0);
            assert!(report.issues_by_status.is_empty());
            assert!(report.non_done_tickets.is_empty());
        }

        it "copies ticket fields from the source issue" {
            let children = vec![issue("PROJ-8", "In Review", "Story", Some("Highest"), Some("Ana"))];

            let report = summarize(epic("PROJ-1"), children);

            let ticket = &report.non_done_tickets[0];
            assert_eq!(ticket.key, "PROJ-8");
            assert_eq!(ticket.summary, "Summary for PROJ-8");
            assert_eq!(ticket.status, "In Review");
            assert_eq!(ticket.issue_type, "Story");
            assert_eq!(ticket.priority, "Highest");
            assert_eq!(ticket.assignee.as_deref(), Some("Ana"));
        }
    }
}
