//! Headless replay: feed throws from the command line and print each step.
//!
//! ```text
//! bowling-replay [--json] <pins|reset>...
//! ```

use anyhow::{anyhow, Result};

use tui_bowling::core::{BowlingGame, GameSnapshot};
use tui_bowling::term::frame_marks;
use tui_bowling::types::FRAME_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Throw(String),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReplayConfig {
    json: bool,
    steps: Vec<Step>,
}

fn parse_replay_args(args: &[String]) -> Result<ReplayConfig> {
    let mut json = false;
    let mut steps = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "reset" | "r" => steps.push(Step::Reset),
            other if other.starts_with("--") => {
                return Err(anyhow!("replay: unknown argument: {}", other));
            }
            other => steps.push(Step::Throw(other.to_string())),
        }
    }
    if steps.is_empty() {
        return Err(anyhow!("usage: bowling-replay [--json] <pins|reset>..."));
    }
    Ok(ReplayConfig { json, steps })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_replay_args(&args)?;

    let mut game = BowlingGame::new();
    for step in &config.steps {
        let line = match step {
            Step::Reset => {
                let snap = game.reset();
                format!("reset -> {}", snap.state.label())
            }
            Step::Throw(raw) => {
                let frame = game.context().frame_index();
                match game.submit_raw(raw) {
                    Ok(snap) => format!(
                        "frame {:>2} throw {:>2} -> {} {:?}",
                        frame,
                        raw,
                        snap.state.label(),
                        snap.throws()
                    ),
                    Err(err) => format!("frame {:>2} throw {:>2} rejected: {}", frame, raw, err),
                }
            }
        };
        if !config.json {
            println!("{}", line);
        }
    }

    let snap = game.snapshot();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&snapshot_json(&snap))?);
    } else {
        println!("{}", sheet_line(&snap));
    }
    Ok(())
}

fn snapshot_json(snap: &GameSnapshot) -> serde_json::Value {
    let frames: Vec<&[u8]> = snap.history.frames().iter().map(|f| f.as_slice()).collect();
    serde_json::json!({
        "state": snap.state.as_str(),
        "frame_index": snap.frame_index(),
        "throws": snap.throws(),
        "pins_left": snap.pins_left,
        "throw_count": snap.throw_count,
        "frames": frames,
    })
}

fn sheet_line(snap: &GameSnapshot) -> String {
    let mut out = String::from("|");
    for n in 1..=FRAME_COUNT {
        let marks: String = frame_marks(n, snap.history.frame(n)).into_iter().collect();
        out.push_str(&format!("{:^5}|", marks));
    }
    out
}
