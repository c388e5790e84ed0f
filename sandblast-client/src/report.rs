// Copyright (c) 2022 MASSA LABS <info@massa.net>

use sandblast_estimator::LoadEstimate;
use sandblast_models::constants::BYTES_PER_MB;

fn mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Renders the full breakdown of one evaluated scenario.
pub fn render_estimate(label: &str, estimate: &LoadEstimate) -> String {
    let shared = &estimate.shared;
    let sapling = &estimate.sapling;
    let orchard = &estimate.orchard;
    let rollup = &estimate.rollup;

    let mut lines = vec![format!("Scenario: {}", label)];
    lines.push(format!("  block interval              {} s", shared.block_time_s));
    lines.push(format!("  blocks per day              {}", shared.blocks_per_day));
    lines.push(format!(
        "  effective block size        {} B",
        shared.effective_block_size
    ));
    lines.push(format!(
        "  trial decrypt multiplier    x{}",
        shared.trial_decrypt_multiplier
    ));
    lines.push(format!(
        "  orchard normal tx           {} B, peak {:.2} tx/s",
        shared.orchard_normal_tx_size, shared.orchard_tps
    ));
    lines.push(String::new());
    lines.push(format!(
        "  sapling: spam tx {} B, {} txs/block, {} outputs/block",
        sapling.spam_tx_size, sapling.txs_per_block, sapling.outputs_per_block
    ));
    lines.push(format!(
        "           raw {:.2} MB/day, {} decrypts/day{}",
        mb(sapling.raw_bandwidth_per_day),
        sapling.raw_decrypts_per_day,
        if estimate.config.exclude_sapling_attack {
            " (excluded from rollup)"
        } else {
            ""
        }
    ));
    lines.push(format!(
        "  orchard: spam tx {} B, {} txs/block, {} actions/block",
        orchard.spam_tx_size, orchard.txs_per_block, orchard.actions_per_block
    ));
    lines.push(format!(
        "           raw {:.2} MB/day, {} decrypts/day",
        mb(orchard.raw_bandwidth_per_day),
        orchard.raw_decrypts_per_day
    ));
    lines.push(String::new());
    lines.push(format!(
        "  max bandwidth per day       {:.2} MB ({}-dominated)",
        rollup.bandwidth_mb_per_day, rollup.bandwidth_dominated_by
    ));
    lines.push(format!(
        "  max trial decrypts per day  {} ({}-dominated)",
        rollup.decrypts_per_day, rollup.decrypts_dominated_by
    ));
    lines.join("\n")
}

/// Renders the final figures of two evaluated scenarios side by side.
pub fn render_comparison(
    baseline_label: &str,
    baseline: &LoadEstimate,
    scenario_label: &str,
    scenario: &LoadEstimate,
) -> String {
    let width = baseline_label.len().max(scenario_label.len());
    let mut lines = vec!["Comparison".to_string()];
    lines.push("  max bandwidth per day:".to_string());
    for (label, estimate) in [(baseline_label, baseline), (scenario_label, scenario)] {
        lines.push(format!(
            "    {:<width$}  {:.2} MB ({}-dominated)",
            label,
            estimate.rollup.bandwidth_mb_per_day,
            estimate.rollup.bandwidth_dominated_by,
        ));
    }
    lines.push("  max trial decrypts per day:".to_string());
    for (label, estimate) in [(baseline_label, baseline), (scenario_label, scenario)] {
        lines.push(format!(
            "    {:<width$}  {} ({}-dominated)",
            label,
            estimate.rollup.decrypts_per_day,
            estimate.rollup.decrypts_dominated_by,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandblast_estimator::evaluate;
    use sandblast_models::SyncConfig;

    #[test]
    fn test_render_estimate() {
        let estimate = evaluate(&SyncConfig::today()).unwrap();
        let report = render_estimate("Today", &estimate);
        assert!(report.contains("Scenario: Today"));
        assert!(report.contains("blocks per day              1152"));
        assert!(report.contains("266.70 MB (sapling-dominated)"));
    }

    #[test]
    fn test_render_comparison() {
        let baseline = evaluate(&SyncConfig::today()).unwrap();
        let scenario = evaluate(&SyncConfig::proposed()).unwrap();
        let report = render_comparison("Today", &baseline, "Proposed", &scenario);
        assert!(report.contains("311.30 MB (orchard-dominated)"));
        assert!(report.contains("4202496 (sapling-dominated)"));
    }
}
