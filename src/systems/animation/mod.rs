use bevy::prelude::*;

use crate::components::{
    AnimationSelector, ClipPlayer, DeploymentState, DescentPhase, KinematicState, LoopMode,
    Skydiver,
};
use crate::plugins::ClipFinished;
use crate::resources::AnimationLibrary;

/// Start `index` on `player`, looping unless it is the one-shot clip.
fn start_clip(
    player: &mut ClipPlayer,
    selector: &AnimationSelector,
    index: i32,
    library: &AnimationLibrary,
) {
    let mode = if selector.is_one_shot(index) {
        LoopMode::Once
    } else {
        LoopMode::Repeat
    };

    match player.play(index, mode, library) {
        Ok(()) => info!("Playing animation {} ({:?})", index, mode),
        Err(e) => warn!("{}", e),
    }
}

/// Pick the animation regime from the height reached this tick.
pub fn animation_regime_system(
    mut query: Query<
        (
            &KinematicState,
            &DeploymentState,
            &DescentPhase,
            &mut AnimationSelector,
            &mut ClipPlayer,
        ),
        With<Skydiver>,
    >,
    library: Res<AnimationLibrary>,
) {
    for (state, deployment, phase, mut selector, mut player) in query.iter_mut() {
        if !phase.is_released() {
            continue;
        }

        if let Some(index) = selector.evaluate(state.height(), deployment.is_deployed()) {
            start_clip(&mut player, &selector, index, &library);
        }
    }
}

pub fn clip_playback_system(
    mut query: Query<(Entity, &mut ClipPlayer)>,
    time: Res<Time>,
    mut finished: EventWriter<ClipFinished>,
) {
    let dt = time.delta_secs_f64();

    for (entity, mut player) in query.iter_mut() {
        if let Some(index) = player.advance(dt) {
            debug!("Animation {} finished", index);
            finished.send(ClipFinished { entity, index });
        }
    }
}

/// Fall back from a finished one-shot clip to its follow-up.
pub fn clip_finished_system(
    mut finished: EventReader<ClipFinished>,
    mut query: Query<(&mut AnimationSelector, &mut ClipPlayer)>,
    library: Res<AnimationLibrary>,
) {
    for event in finished.read() {
        let Ok((mut selector, mut player)) = query.get_mut(event.entity) else {
            continue;
        };

        if let Some(next) = selector.on_clip_finished(event.index) {
            start_clip(&mut player, &selector, next, &library);
        }
    }
}
