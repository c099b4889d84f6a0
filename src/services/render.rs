use crate::services::plan::{PlanEntry, PlanResult};

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}td,th{border:1px solid #ccc;padding:.4rem;vertical-align:top}\
label{display:block;margin:.5rem 0}";

pub fn render_index() -> String {
    let body = r#"<h1>Workout &amp; Meal Planner</h1>
<form method="post" action="/predict">
<label>Name <input name="name" required></label>
<label>Height (cm) <input name="height" type="number" step="any" required></label>
<label>Weight (kg) <input name="weight" type="number" step="any" required></label>
<label>Age <input name="age" type="number" min="0" required></label>
<label>Gender <select name="gender"><option value="male">Male</option><option value="female">Female</option></select></label>
<label>Goal <select name="goal"><option value="bulking">Bulking</option><option value="cutting">Cutting</option><option value="maintain">Maintain</option></select></label>
<label>Activity level <select name="activity_level">
<option value="sedentary">Sedentary</option><option value="light">Light</option><option value="moderate">Moderate</option>
<option value="active">Active</option><option value="very active">Very active</option></select></label>
<label>Targeted muscle <input name="targeted_muscle" required></label>
<label>Max difficulty <input name="difficulty" type="number" required></label>
<label>Weeks <input name="num_weeks" type="number" min="0" required></label>
<label>Diet <select name="diet_type"><option value="veg">Veg</option><option value="non-veg">Non-veg</option></select></label>
<button type="submit">Generate plan</button>
</form>"#;
    page("Workout & Meal Planner", body)
}

pub fn render_result(result: &PlanResult) -> String {
    let mut body = format!("<h1>Plan for {}</h1>\n", escape_html(&result.name));
    body.push_str(&format!(
        "<p>Daily calories: <strong>{}</strong> kcal</p>\n",
        result.daily_calories
    ));
    body.push_str(&format!(
        "<p>Protein: {} g &middot; Carbs: {} g &middot; Fats: {} g</p>\n",
        result.protein, result.carbs, result.fats
    ));

    if result.plan.is_empty() {
        body.push_str("<p>No weeks requested.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Week</th><th>Day</th><th>Workout</th><th>Diet</th></tr>\n");
        for entry in &result.plan {
            body.push_str(&format_entry_row(entry));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<p><a href=\"/\">Start over</a></p>");
    page("Your plan", &body)
}

pub fn render_error(message: &str) -> String {
    let body = format!(
        "<h1>Could not build a plan</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>",
        escape_html(message)
    );
    page("Error", &body)
}

fn format_entry_row(entry: &PlanEntry) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        entry.week,
        entry.day,
        format_list(&entry.workout),
        format_list(&entry.diet)
    )
}

fn format_list(items: &[String]) -> String {
    let rows = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("");
    format!("<ul>{}</ul>", rows)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head>\n<body>\n{}\n</body></html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> PlanResult {
        PlanResult {
            name: "<Sam>".to_string(),
            daily_calories: 2075.45,
            protein: 155.7,
            carbs: 207.5,
            fats: 69.2,
            plan: vec![PlanEntry {
                week: 1,
                day: 1,
                workout: vec!["Push Up - 3 sets x 8 reps".to_string()],
                diet: vec!["Breakfast: Oats & Milk - 330 kcal".to_string()],
            }],
        }
    }

    #[test]
    fn test_render_result_lists_plan() {
        let html = render_result(&result());

        assert!(html.contains("Plan for &lt;Sam&gt;"));
        assert!(html.contains("<strong>2075.45</strong>"));
        assert!(html.contains("Protein: 155.7 g"));
        assert!(html.contains("<li>Push Up - 3 sets x 8 reps</li>"));
        assert!(html.contains("<li>Breakfast: Oats &amp; Milk - 330 kcal</li>"));
        assert!(!html.contains("<Sam>"));
    }

    #[test]
    fn test_render_index_has_every_field() {
        let html = render_index();
        for field in [
            "name",
            "height",
            "weight",
            "age",
            "gender",
            "goal",
            "activity_level",
            "targeted_muscle",
            "difficulty",
            "num_weeks",
            "diet_type",
        ] {
            assert!(html.contains(&format!("name=\"{}\"", field)), "missing {field}");
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
