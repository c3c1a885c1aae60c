//! Text rendering of the two screens.
//!
//! Pure functions from store snapshots to output lines; the shell calls them
//! after every mutation.

use todo::TodoItem;

/// Static content shown on the home screen alongside the counter
const CONCEPTS: [(&str, &str); 3] = [
    (
        "Owned stores",
        "Each store owns its state; every change goes through its operations.",
    ),
    (
        "Silent no-ops",
        "Blank text and unknown ids change nothing and report nothing.",
    ),
    (
        "Confirm before delete",
        "The shell asks before removing; the store removes unconditionally.",
    ),
];

/// Render the to-do screen
#[must_use]
pub fn todo_screen(items: &[TodoItem]) -> Vec<String> {
    let done = items.iter().filter(|t| t.completed).count();
    let mut lines = vec![format!("Todo List ({done}/{} done)", items.len())];

    if items.is_empty() {
        lines.push("  (nothing to do)".to_string());
    }
    for item in items {
        let mark = if item.completed { "x" } else { " " };
        lines.push(format!("  [{mark}] #{} {}", item.id, item.text));
    }
    lines
}

/// Render the counter
#[must_use]
pub fn counter_screen(value: i64) -> Vec<String> {
    vec![format!("Count: {value}")]
}

/// Render the delete confirmation prompt
#[must_use]
pub fn confirm_delete(item: &TodoItem) -> Vec<String> {
    vec![
        "Delete Todo".to_string(),
        format!("  #{} {}", item.id, item.text),
        "Are you sure? [y/N]".to_string(),
    ]
}

/// Render the help screen
#[must_use]
pub fn help() -> Vec<String> {
    let mut lines: Vec<String> = [
        "Commands:",
        "  todo [ls]            show the list",
        "  todo add <text>      add an item",
        "  todo toggle <id>     mark done / not done",
        "  todo rm <id>         delete an item (asks first)",
        "  count [+|-|reset]    show or change the counter",
        "  help                 this screen",
        "  quit                 leave",
        "",
        "Key concepts:",
    ]
    .iter()
    .map(|line| (*line).to_string())
    .collect();

    for (title, description) in CONCEPTS {
        lines.push(format!("  {title}: {description}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo::TodoId;

    #[test]
    fn renders_items_with_marks() {
        let items = vec![
            TodoItem::new(TodoId::new(1), "Done thing").with_completed(true),
            TodoItem::new(TodoId::new(2), "Open thing"),
        ];

        assert_eq!(
            todo_screen(&items),
            vec![
                "Todo List (1/2 done)",
                "  [x] #1 Done thing",
                "  [ ] #2 Open thing",
            ]
        );
    }

    #[test]
    fn renders_empty_list() {
        assert_eq!(
            todo_screen(&[]),
            vec!["Todo List (0/0 done)", "  (nothing to do)"]
        );
    }

    #[test]
    fn help_lists_concepts() {
        let lines = help();
        assert!(lines.iter().any(|l| l.contains("Silent no-ops")));
    }
}
