use std::f64::consts::PI;

use float_eq::assert_float_eq;
use muffle::{Assembly, BuildConfig, Intent, Rig};

#[test]
fn tick_writes_joint_transforms() {
    let mut assembly = Assembly::build(&BuildConfig::default()).unwrap();
    let mut rig = Rig::new();
    let intent = Intent::default();

    let joints = (0..100)
        .map(|_| rig.tick(&mut assembly, &intent, 16.0))
        .last()
        .unwrap();

    // Settled: yaw at 20% of 110°, tilt at 50% of 50°, extension at half its range.
    assert_float_eq!(joints.muff_yaw, 22f64.to_radians() - 20f64.to_radians(), abs <= 1e-9);
    assert_float_eq!(joints.muff_tilt, 25f64.to_radians() - 5f64.to_radians(), abs <= 1e-9);
    assert_float_eq!(joints.extension, 0.75 * PI / 16.0, abs <= 1e-9);

    let transform = |id| assembly.part(id).unwrap().transform;
    assert_eq!(transform(assembly.left_muff.brace).rotation.y, joints.muff_yaw);
    assert_eq!(transform(assembly.right_muff.brace).rotation.y, -joints.muff_yaw);
    assert_eq!(transform(assembly.left_muff.base).rotation.x, joints.muff_tilt);
    assert_eq!(transform(assembly.right_muff.base).rotation.x, joints.muff_tilt);
    assert_eq!(transform(assembly.headband.left).rotation.z, joints.extension);
    assert_eq!(transform(assembly.headband.right).rotation.z, -joints.extension);

    // Untouched by the rig.
    assert_eq!(transform(assembly.left_muff.root).rotation.y, PI / 2.0);
}

#[test]
fn joints_move_at_bounded_speed() {
    let mut assembly = Assembly::build(&BuildConfig::default()).unwrap();
    let mut rig = Rig::new();
    let open = Intent {
        muff_yaw: 100.0,
        muff_tilt: 100.0,
        extension: 100.0,
    };

    let before = rig.joints();
    let after = rig.tick(&mut assembly, &open, 10.0);
    assert_float_eq!(after.muff_yaw - before.muff_yaw, PI / 200.0, abs <= 1e-12);
    assert_float_eq!(after.muff_tilt - before.muff_tilt, PI / 200.0, abs <= 1e-12);
    assert_float_eq!(after.extension - before.extension, PI / 500.0, abs <= 1e-12);

    // Closing again never jumps.
    let closed = Intent {
        muff_yaw: 0.0,
        muff_tilt: 0.0,
        extension: 0.0,
    };
    let mut previous = after;
    for _ in 0..50 {
        let next = rig.tick(&mut assembly, &closed, 16.0);
        assert!(next.muff_yaw <= previous.muff_yaw);
        assert!(previous.muff_yaw - next.muff_yaw <= PI / 2000.0 * 16.0 + 1e-12);
        previous = next;
    }
    assert_float_eq!(previous.muff_yaw, -20f64.to_radians(), abs <= 1e-12);
}
