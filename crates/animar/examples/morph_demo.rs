//! Morph Demo - driving a full animation session end to end
//!
//! Morphs a rectangle, a circle, and a triangle between keyframe states
//! while a [`TraceSink`] plays the role of the external rasterizer/encoder.
//! Run with `RUST_LOG=debug` to watch every sink call.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=debug cargo run --example morph_demo -p animar
//! ```

use animar::frame::extend_to_aspect_ratio;
use animar::{
    AnimarResult, Animator, Circle, Geometry, Interpolator, Polygon, Quadratic, Rectangle, Rgb,
    TraceSink, Vector, VideoSink,
};

fn main() -> AnimarResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Animar Morph Demo ===\n");

    let interp = Interpolator::new(Quadratic);

    // Keyframe states.
    let rect_a = Rectangle::by_center_and_size(Vector::ZERO, 2.0, 2.0);
    let rect_b = Rectangle::by_center_and_size(Vector::new(10.0, 0.0), 4.0, 4.0);
    let circle = Circle::new(Vector::new(5.0, 4.0), 1.0);
    let triangle = Polygon::new(vec![
        Vector::new(4.0, -4.0),
        Vector::new(6.0, -4.0),
        Vector::new(5.0, -2.0),
    ]);

    // Widen the world viewport to the video's 16:9 ratio.
    let mut viewport = Rectangle::by_center_and_size(Vector::new(5.0, 0.0), 16.0, 12.0);
    extend_to_aspect_ratio(&mut viewport, 16.0 / 9.0);
    println!(
        "viewport: {:.1} x {:.1} around ({:.1}, {:.1})",
        viewport.width(),
        viewport.height(),
        viewport.center().x,
        viewport.center().y
    );

    let mut sink = TraceSink::new();
    sink.initialize()?;

    let animator = Animator::new(61)?;
    animator.run(|frame, fraction| {
        sink.begin_frame(&viewport, Some(Rgb::WHITE))?;

        // Rectangle morphs between the two keyframe states.
        sink.draw(&Geometry::from(
            interp.between_rectangles(fraction, &rect_a, &rect_b),
        ))?;

        // Circle grows in from nothing.
        sink.draw(&Geometry::from(interp.scale(
            fraction,
            &circle,
            1.0,
            circle.center(),
        )))?;

        // Triangle makes a half turn about its own centroid while sliding right.
        let spun = interp.rotate(
            fraction,
            &triangle,
            std::f64::consts::PI,
            Vector::new(5.0, -10.0 / 3.0),
        );
        sink.draw(&Geometry::from(interp.translate(
            fraction,
            &spun,
            Vector::new(3.0, 0.0),
        )))?;

        // Hold the final frame for a second of 30fps video.
        let hold = if frame == animator.frame_count() - 1 {
            30
        } else {
            1
        };
        sink.end_frame(hold)
    })?;

    sink.close()?;
    println!(
        "\nencoded {} frames across {} animation steps",
        sink.frames_appended(),
        animator.frame_count()
    );
    println!("\n=== Morph Demo Complete ===");
    Ok(())
}
