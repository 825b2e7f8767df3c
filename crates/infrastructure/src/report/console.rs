use cachesim_domain::{SimulationReport, SweepPoint};
use std::fmt::Write;

pub fn render_summary(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cache simulation results");
    let _ = writeln!(out, "  total accesses : {}", report.total_accesses);
    let _ = writeln!(out, "  hits           : {}", report.hits);
    let _ = writeln!(out, "  misses         : {}", report.misses);
    let _ = writeln!(out, "  hit rate       : {:.2}%", report.hit_rate * 100.0);
    let _ = writeln!(out, "  miss rate      : {:.2}%", report.miss_rate * 100.0);
    let _ = writeln!(out, "  AMAT           : {:.2} cycles", report.amat);
    out
}

pub fn render_sweep(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>6} {:>10} {:>10} {:>10} {:>9} {:>9}",
        "ways", "sets", "accesses", "hits", "misses", "hit rate", "AMAT"
    );
    for point in points {
        let r = &point.report;
        let _ = writeln!(
            out,
            "{:>5} {:>6} {:>10} {:>10} {:>10} {:>8.2}% {:>9.2}",
            point.associativity,
            point.num_sets,
            r.total_accesses,
            r.hits,
            r.misses,
            r.hit_rate * 100.0,
            r.amat
        );
    }
    out
}
