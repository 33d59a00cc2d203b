//=========================================================================
// Demo
//=========================================================================
//
// Menu → gameplay → menu, with pre-spawned placeholder objects and
// alerts. Runs headless for a fixed number of frames; pass `--window`
// to open a window instead, `--verbose` for coordinator debug logs.
//
//=========================================================================

use aetheric_views::logging::{init_logging, LoggingConfig};
use aetheric_views::prelude::*;
use log::info;

//=== Views ===============================================================

struct MenuView {
    idle_frames: u32,
}

impl MenuView {
    fn new() -> Self {
        Self { idle_frames: 0 }
    }
}

impl View for MenuView {
    fn name(&self) -> &str {
        "menu"
    }

    fn enter(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError> {
        self.idle_frames = 0;
        ctx.alert(format!("Welcome, player {}", ctx.user_id()));
        Ok(())
    }

    fn tick(&mut self, ctx: &mut ViewContext) {
        self.idle_frames += 1;
        if self.idle_frames == 30 {
            ctx.transition_to(GameplayView::new());
        }
    }

    fn render(&self, ctx: &RenderContext) {
        if ctx.frame() % 30 == 0 {
            info!("[menu] frame {} ({} idle)", ctx.frame(), self.idle_frames);
        }
    }
}

struct GameplayView {
    player_anchor: Option<ObjectHandle>,
    elapsed: u32,
}

impl GameplayView {
    fn new() -> Self {
        Self {
            player_anchor: None,
            elapsed: 0,
        }
    }
}

impl View for GameplayView {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn enter(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError> {
        ctx.before_player_spawn()?;
        let anchor = ctx
            .objects()
            .lookup("test_moby")
            .ok_or_else(|| ViewError::MissingObject("test_moby".to_string()))?;

        self.player_anchor = Some(anchor);
        ctx.alert("Player spawned");
        Ok(())
    }

    fn exit(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError> {
        ctx.alert("Returning to menu");
        Ok(())
    }

    fn tick(&mut self, ctx: &mut ViewContext) {
        self.elapsed += 1;
        if self.elapsed == 60 {
            ctx.transition_to(MenuView::new());
        }
    }

    fn render(&self, ctx: &RenderContext) {
        if let Some(anchor) = self.player_anchor {
            if ctx.frame() % 30 == 0 {
                info!(
                    "[gameplay] frame {} anchored to {:?}",
                    ctx.frame(),
                    ctx.objects().get(anchor)
                );
            }
        }
    }
}

//=== Entry Point =========================================================

fn main() -> Result<(), EngineError> {
    let args: Vec<String> = std::env::args().collect();
    let flag = |name: &str| args.iter().any(|arg| arg == name);

    init_logging(if flag("--verbose") {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let windowed = flag("--window");
    let mut engine = EngineBuilder::new()
        .with_window_title("Aetheric Views Demo")
        .with_user_id(1)
        .with_initial_view(MenuView::new())
        .build();

    if windowed {
        return engine.run();
    }

    engine.run_frames(180)?;
    info!(
        "Finished on {} after {} frames",
        engine.coordinator().current_view_name().unwrap_or("nothing"),
        engine.coordinator().frame()
    );
    Ok(())
}
