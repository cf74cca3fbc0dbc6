use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use truism_core::config::DisplayConfig;
use truism_core::model::chain_model::ChainModel;
use truism_core::model::generator::Generator;
use truism_core::ui_state::{TouchPoint, UiState};

const CORPUS: &str = "./data/quotes.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Build the chain from the quotes file (or its .bin snapshot if present)
    let model = ChainModel::load(CORPUS)?;
    println!("Chain ready: {} distinct words", model.vocabulary_len());

    // Pre-compile the chain next to the corpus, for devices that
    // cannot afford to tokenize the text at boot
    let snapshot = model.save_snapshot(CORPUS)?;
    println!("Snapshot written to {}", snapshot.display());

    // A fixed seed makes the whole session reproducible
    let mut rng = StdRng::seed_from_u64(2024);
    let generator = Generator::new(&model);
    let config = DisplayConfig::default();

    let mut state = UiState::new(&config, &generator, &mut rng)?;
    println!("Boot quote:\n{}\n", state.text());

    // Replay a scripted touch session, polled every 50 ms:
    // a tap on the left, a long press in the middle, a tap on the right
    let script: [(u64, u64, f32); 3] = [(500, 600, 20.0), (1_500, 2_700, 160.0), (3_500, 3_550, 300.0)];
    let frame = Duration::from_millis(50);
    let mut now = Duration::ZERO;

    while now <= Duration::from_millis(4_000) {
        let ms = now.as_millis() as u64;
        let touch = script
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&ms))
            .map(|(_, _, x)| TouchPoint { x: *x, y: 120.0 });

        let update = state.on_frame(&generator, &mut rng, touch, now)?;
        if update.regenerated {
            println!("[{ms:>5} ms] {}", state.caption().unwrap_or_default());
            println!("color #{:06X} (base #{:06X})", update.color, state.base_color());
            println!("{}\n", state.text());
        }
        now += frame;
    }

    // Plain generation, without the screen state
    for i in 0..5 {
        println!("Generated quote {}: {}", i + 1, generator.generate(&mut rng)?);
    }

    Ok(())
}
