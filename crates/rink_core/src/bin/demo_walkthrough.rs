// Scripted demo walkthrough runner
// Run with: cargo run --bin demo_walkthrough

use rink_core::demo::TICK_INTERVAL_MS;
use rink_core::{data, DemoPhase, DemoSequencer, RosterModel, Session, SessionController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏒 Running training demo walkthrough...");

    let mut roster = RosterModel::new();
    roster.initialize(data::default_roster().to_vec());
    println!("📋 Roster loaded: {} players", roster.len());

    let session = Session::new("Entraînement Titans U15 AAA", "Titans U15 AAA", 90);
    let mut controller = SessionController::new(session, roster);

    let mut demo = DemoSequencer::new();
    demo.start(&mut controller, 0)?;
    println!("▶️  Demo started");

    let mut now_ms = 0u64;
    let mut last_phase = DemoPhase::Idle;
    while demo.is_active() {
        now_ms += TICK_INTERVAL_MS;
        demo.tick(&mut controller, now_ms);

        if demo.phase() != last_phase {
            last_phase = demo.phase();
            println!(
                "⏱️  t={:>5}ms phase={:?} placed={} running={}",
                now_ms,
                last_phase,
                controller.assigned_count(),
                controller.is_running()
            );
        }

        if now_ms > 60_000 {
            return Err("demo did not terminate within 60s of simulated time".into());
        }
    }

    println!("\n🏁 Final placements:");
    let mut placements: Vec<_> = controller.placements().iter().collect();
    placements.sort_by(|a, b| a.0.cmp(b.0));
    for (player_id, placement) in placements {
        let name = controller
            .roster()
            .get(player_id)
            .map(|p| p.name.as_str())
            .unwrap_or("<unknown>");
        println!("   {:<18} x={:5.1} y={:5.1}", name, placement.x, placement.y);
    }

    if controller.is_running() {
        return Err("controller should be idle after the demo".into());
    }
    println!("✅ Demo finished, session back to idle");
    Ok(())
}
