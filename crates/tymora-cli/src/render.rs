//! Report rendering: terminal table, chat-card HTML, and JSON.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tymora_engine::{Classification, RollReport};
use tymora_roster::format_modifier;

/// Render the report as a colored terminal table with a ranked footer.
pub fn render_table(
    report: &RollReport,
    scene_name: &str,
    ability: &str,
    seed: Option<u64>,
) -> String {
    let mut out = String::new();

    let context = match seed {
        Some(seed) => format!("(scene '{scene_name}', {ability}, seed={seed})"),
        None => format!("(scene '{scene_name}', {ability})"),
    };
    out.push_str(&format!(
        "  {} {}\n",
        "Multiverse favors the bold!".bold(),
        context.dimmed()
    ));
    out.push_str("  Let's roll for luck\n\n");

    if report.is_empty() {
        out.push_str("  No player characters in the scene. Nothing to roll.\n");
        return out;
    }

    let label = ability_label(ability);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Character".to_string(),
        "d20".to_string(),
        format!("{label} mod"),
        "Total".to_string(),
        "Luck".to_string(),
    ]);

    for entry in &report.entries {
        let luck = match entry.outcome.classification {
            Classification::Critical => "critical".green().bold().to_string(),
            Classification::Fumble => "fumble".red().bold().to_string(),
            Classification::Normal => "—".dimmed().to_string(),
        };
        table.add_row(vec![
            entry.entrant.name.clone(),
            paint(
                &entry.outcome.die_value.to_string(),
                entry.outcome.classification,
            ),
            format_modifier(entry.entrant.modifier),
            paint(&entry.outcome.total.to_string(), entry.outcome.classification),
            luck,
        ]);
    }

    out.push_str(&format!("{table}\n"));

    if let Some(best) = &report.best {
        out.push_str(&format!(
            "\n  {} luck character: {} with {}\n",
            "Best".green().bold(),
            best.name,
            best.total
        ));
    }
    if let Some(worst) = &report.worst {
        out.push_str(&format!(
            "  {} luck character: {} with {}\n",
            "Worst".red().bold(),
            worst.name,
            worst.total
        ));
    }

    out
}

/// Render the report as an HTML chat card.
pub fn render_html(report: &RollReport, ability: &str) -> String {
    let label = ability_label(ability);
    let mut out = String::from(
        "<h2>Multiverse favors the bold!</h2>\n<p>Let's roll for luck</p>\n<table>\n  <tr><th>Character</th><th>Result</th></tr>\n",
    );

    for entry in &report.entries {
        let color = match entry.outcome.classification {
            Classification::Critical => "green",
            Classification::Fumble => "red",
            Classification::Normal => "black",
        };
        out.push_str(&format!(
            "  <tr>\n    <td>{}</td>\n    <td>\n      Rolled <b style=\"color: {color}\">{}</b><br/>\n      1d20: <b style=\"color: {color}\">{}</b> + {label} ({})\n    </td>\n  </tr>\n",
            entry.entrant.name,
            entry.outcome.total,
            entry.outcome.die_value,
            entry.entrant.modifier
        ));
    }

    out.push_str("</table>\n");

    if let Some(best) = &report.best {
        out.push_str(&format!(
            "<h3 style=\"color: green\"><b>Best</b> luck character: {} with {}</h3>\n",
            best.name, best.total
        ));
    }
    if let Some(worst) = &report.worst {
        out.push_str(&format!(
            "<h3 style=\"color: red\"><b>Worst</b> luck character: {} with {}</h3>\n",
            worst.name, worst.total
        ));
    }

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(
    report: &RollReport,
    scene_name: &str,
    ability: &str,
    seed: Option<u64>,
) -> Result<String, String> {
    let rolls: Vec<_> = report
        .entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "name": entry.entrant.name,
                "modifier": entry.entrant.modifier,
                "die": entry.outcome.die_value,
                "total": entry.outcome.total,
                "classification": entry.outcome.classification,
            })
        })
        .collect();

    let export = serde_json::json!({
        "scene": scene_name,
        "ability": ability,
        "seed": seed,
        "rolls": rolls,
        "best": report.best,
        "worst": report.worst,
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}

fn paint(text: &str, classification: Classification) -> String {
    match classification {
        Classification::Critical => text.green().bold().to_string(),
        Classification::Fumble => text.red().bold().to_string(),
        Classification::Normal => text.to_string(),
    }
}

fn ability_label(ability: &str) -> String {
    let mut chars = ability.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tymora_engine::{Entrant, ScriptedRolls, compute_luck_rolls};

    fn sample_report() -> RollReport {
        let entrants = vec![
            Entrant::new("Annah", 2),
            Entrant::new("Nameless", -1),
            Entrant::new("Dak'kon", 0),
        ];
        let mut source = ScriptedRolls::new([20, 1, 9]);
        compute_luck_rolls(entrants, &mut source).unwrap()
    }

    #[test]
    fn table_shows_every_entrant_and_the_extrema() {
        colored::control::set_override(false);
        let out = render_table(&sample_report(), "Smoldering Corpse Bar", "belief", None);
        assert!(out.contains("Multiverse favors the bold!"));
        assert!(out.contains("Let's roll for luck"));
        assert!(out.contains("Annah"));
        assert!(out.contains("Nameless"));
        assert!(out.contains("Dak'kon"));
        assert!(out.contains("+2"));
        assert!(out.contains("-1"));
        assert!(out.contains("Best luck character: Annah with 22"));
        assert!(out.contains("Worst luck character: Nameless with 0"));
    }

    #[test]
    fn table_labels_criticals_and_fumbles() {
        colored::control::set_override(false);
        let out = render_table(&sample_report(), "Smoldering Corpse Bar", "belief", None);
        assert!(out.contains("critical"));
        assert!(out.contains("fumble"));
    }

    #[test]
    fn table_header_mentions_the_seed() {
        colored::control::set_override(false);
        let out = render_table(&sample_report(), "Smoldering Corpse Bar", "belief", Some(42));
        assert!(out.contains("seed=42"));
    }

    #[test]
    fn table_notes_an_empty_scene() {
        colored::control::set_override(false);
        let out = render_table(&RollReport::default(), "Empty Hall", "belief", None);
        assert!(out.contains("No player characters in the scene. Nothing to roll."));
        assert!(!out.contains("Best luck character"));
    }

    #[test]
    fn html_matches_the_chat_card_markup() {
        let out = render_html(&sample_report(), "belief");
        insta::assert_snapshot!(out, @r#"
<h2>Multiverse favors the bold!</h2>
<p>Let's roll for luck</p>
<table>
  <tr><th>Character</th><th>Result</th></tr>
  <tr>
    <td>Annah</td>
    <td>
      Rolled <b style="color: green">22</b><br/>
      1d20: <b style="color: green">20</b> + Belief (2)
    </td>
  </tr>
  <tr>
    <td>Nameless</td>
    <td>
      Rolled <b style="color: red">0</b><br/>
      1d20: <b style="color: red">1</b> + Belief (-1)
    </td>
  </tr>
  <tr>
    <td>Dak'kon</td>
    <td>
      Rolled <b style="color: black">9</b><br/>
      1d20: <b style="color: black">9</b> + Belief (0)
    </td>
  </tr>
</table>
<h3 style="color: green"><b>Best</b> luck character: Annah with 22</h3>
<h3 style="color: red"><b>Worst</b> luck character: Nameless with 0</h3>
"#);
    }

    #[test]
    fn html_capitalizes_the_ability_label() {
        let out = render_html(&sample_report(), "wisdom");
        assert!(out.contains("+ Wisdom (2)"));
    }

    #[test]
    fn empty_html_report_has_no_extrema_headings() {
        let out = render_html(&RollReport::default(), "belief");
        insta::assert_snapshot!(out, @r#"
<h2>Multiverse favors the bold!</h2>
<p>Let's roll for luck</p>
<table>
  <tr><th>Character</th><th>Result</th></tr>
</table>
"#);
    }

    #[test]
    fn json_exposes_rolls_and_extrema() {
        let out = render_json(&sample_report(), "Smoldering Corpse Bar", "belief", Some(7)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["scene"], "Smoldering Corpse Bar");
        assert_eq!(v["ability"], "belief");
        assert_eq!(v["seed"], 7);
        assert_eq!(v["rolls"].as_array().unwrap().len(), 3);
        assert_eq!(v["rolls"][0]["die"], 20);
        assert_eq!(v["rolls"][0]["total"], 22);
        assert_eq!(v["rolls"][0]["classification"], "critical");
        assert_eq!(v["rolls"][1]["classification"], "fumble");
        assert_eq!(v["best"]["name"], "Annah");
        assert_eq!(v["worst"]["total"], 0);
    }

    #[test]
    fn json_handles_an_empty_report() {
        let out = render_json(&RollReport::default(), "Empty Hall", "belief", None).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(v["seed"].is_null());
        assert_eq!(v["rolls"].as_array().unwrap().len(), 0);
        assert!(v["best"].is_null());
        assert!(v["worst"].is_null());
    }
}
