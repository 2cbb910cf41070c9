use crate::domain::models::{BodyOutcome, CanonicalModel, JsonOut, PointEvaluation, RunReport};
use serde::Serialize;

const RULE_WIDTH: usize = 72;

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}

pub fn render_report(report: &RunReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        format!("Golden   : {}", report.golden),
        format!("Manifests: {}", report.manifests),
        format!("Tol(deg) : {:e}", report.tolerance_deg),
        rule.clone(),
    ];
    for body in &report.bodies {
        lines.extend(render_body(body));
    }
    if let Some(nodes) = &report.nodes {
        lines.push(rule.clone());
        lines.push(format!(
            "Nodes     | shared_dates={} | max|Δ-180|={:.9} deg | {}",
            nodes.shared_dates,
            nodes.max_deviation_deg,
            nodes.status.as_str()
        ));
    }
    lines.push(rule);
    lines.push(format!("RESULT: {}", report.result.as_str()));
    lines.join("\n")
}

fn render_body(body: &BodyOutcome) -> Vec<String> {
    if let Some(err) = &body.error {
        return vec![format!("{:<8} | FAIL: {}", body.body, err)];
    }
    let mut lines = vec![format!(
        "{:<8} | rows={:>3} | max_abs_err={:.8} deg | mismatches={:>3} | {}",
        body.body,
        body.rows,
        body.max_abs_err_deg,
        body.mismatches,
        body.status.as_str()
    )];
    if let Some(manifest) = &body.manifest {
        let note = if body.node_fallback {
            " (fallback=Rahu+180)"
        } else {
            ""
        };
        lines.push(format!("          | manifest: {}{}", manifest, note));
    }
    lines
}

pub fn render_model(model: &CanonicalModel) -> String {
    let mut lines = vec![
        format!("body: {}", model.body),
        format!("epoch: {}", model.epoch),
        format!("a0_deg: {}", model.a0_deg),
        format!("n_deg_per_day: {}", model.rate_deg_per_day),
        format!("terms: {}", model.terms.len()),
    ];
    for t in &model.terms {
        lines.push(format!(
            "  w={}\tc={}\td={}",
            t.omega_rad_per_day, t.sin_coeff, t.cos_coeff
        ));
    }
    lines.join("\n")
}

pub fn render_point(point: &PointEvaluation) -> String {
    let note = if point.node_fallback {
        " (fallback=Rahu+180)"
    } else {
        ""
    };
    format!(
        "{}\t{}\t{:.8}\trasi={}\tmanifest={}{}",
        point.body, point.date, point.angle_deg, point.rasi, point.manifest, note
    )
}
