// Discrete notifications produced by a tick, consumed by audio/HUD adapters.

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    ShotFired { bullet_id: u64 },
    EnemyDestroyed { enemy_id: u64, bullet_id: u64 },
    EnemyBreached { enemy_id: u64 },
    SpecialTriggered { cleared: usize },
}
