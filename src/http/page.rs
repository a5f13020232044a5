//! Server-rendered roster page

use crate::entity::Employee;

/// Escape text for use inside HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn employee_row(e: &Employee) -> String {
    format!(
        "<tr data-id=\"{id}\"><td>{id}</td><td>{first}</td><td>{last}</td><td>{role}</td>\
         <td>{salary}</td><td>{team}</td><td>{hired}</td>\
         <td><button type=\"button\" onclick=\"deleteEmployee({id})\">Delete</button></td></tr>\n",
        id = e.id,
        first = escape_html(&e.first_name),
        last = escape_html(&e.last_name),
        role = escape_html(&e.role),
        salary = e.salary,
        team = escape_html(&e.team),
        hired = e.hire_date,
    )
}

const SCRIPT: &str = r#"<script>
async function deleteEmployee(id) {
  const res = await fetch(`/employees/${id}`, { method: "DELETE" });
  if (res.ok) { location.reload(); } else { alert((await res.json()).error); }
}
document.getElementById("add-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const res = await fetch("/employees/", { method: "POST", body: new URLSearchParams(new FormData(event.target)) });
  const data = await res.json();
  if (res.ok) { location.reload(); } else { alert(data.error + (data.details ? ": " + data.details.join(", ") : "")); }
});
document.getElementById("chat-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const out = document.getElementById("chat-answer");
  out.textContent = "...";
  const res = await fetch("/chat/", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ query: event.target.query.value }),
  });
  const data = await res.json();
  out.textContent = res.ok ? data.ai_response : data.error;
});
</script>"#;

/// Render the full listing page
pub fn render_index(employees: &[Employee], chat_enabled: bool) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>HR Desk</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n<body>\n<h1>Employees</h1>\n",
    );

    html.push_str(
        "<table>\n<thead><tr><th>ID</th><th>First name</th><th>Last name</th><th>Role</th>\
         <th>Salary</th><th>Team</th><th>Hire date</th><th></th></tr></thead>\n<tbody>\n",
    );
    if employees.is_empty() {
        html.push_str("<tr><td colspan=\"8\">No employees yet.</td></tr>\n");
    } else {
        for e in employees {
            html.push_str(&employee_row(e));
        }
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str(
        "<h2>Add employee</h2>\n<form id=\"add-form\">\n\
         <input name=\"first_name\" placeholder=\"First name\" required>\n\
         <input name=\"last_name\" placeholder=\"Last name\" required>\n\
         <input name=\"role\" placeholder=\"Role\" required>\n\
         <input name=\"salary\" type=\"number\" step=\"0.01\" min=\"0\" placeholder=\"Salary\" required>\n\
         <input name=\"team\" placeholder=\"Team\" required>\n\
         <input name=\"hire_date\" type=\"date\" required>\n\
         <button type=\"submit\">Add</button>\n</form>\n",
    );

    html.push_str("<h2>Ask the assistant</h2>\n");
    if !chat_enabled {
        html.push_str("<p class=\"notice\">The assistant is not configured (GROQ_API_KEY is missing).</p>\n");
    }
    html.push_str(
        "<form id=\"chat-form\">\n<input name=\"query\" placeholder=\"Who joined the team most recently?\" required>\n\
         <button type=\"submit\">Ask</button>\n</form>\n<pre id=\"chat-answer\"></pre>\n",
    );

    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}
