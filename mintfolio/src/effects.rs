use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

const DARK: Color = Color::Rgb(13, 17, 23);

/// View transition: content sweeps in from the left
pub fn view_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Cards slide up into place when the app launches
pub fn deal_in() -> Effect {
    fx::slide_in(Motion::DownToUp, 3, 1, DARK, (350, Interpolation::CubicOut))
}

/// Quick fade-in for the forecast panel when the scarcity view opens
pub fn forecast_fade_in() -> Effect {
    fx::coalesce((400, Interpolation::QuadOut))
}
