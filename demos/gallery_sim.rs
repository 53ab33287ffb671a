//! Simulated gallery flow: tap a thumbnail to open the viewer, then pan
//! down to dismiss it. Run with RUST_LOG=debug to see the engine's own
//! logging alongside the frame dumps.

use herozoom::prelude::*;

struct ConsoleHost {
    chrome_opacity: f32,
    proxy_frame: Option<Rect>,
}

impl TransitionHost for ConsoleHost {
    fn insert_destination(&mut self, order: ScreenOrder) {
        println!("host: insert destination {:?}", order);
    }
    fn mount_proxy(&mut self, image: ImageRef, frame: Rect) {
        println!("host: mount proxy for image {} at {:?}", image.id, frame);
        self.proxy_frame = Some(frame);
    }
    fn update_proxy(&mut self, frame: Rect) {
        self.proxy_frame = Some(frame);
    }
    fn unmount_proxy(&mut self) {
        println!("host: unmount proxy");
        self.proxy_frame = None;
    }
    fn update_interactive_transition(&mut self, progress: f32) {
        println!("host: interactive progress {:.2}", progress);
    }
    fn finish_interactive_transition(&mut self) {
        println!("host: finish interactive transition");
    }
    fn cancel_interactive_transition(&mut self) {
        println!("host: cancel interactive transition");
    }
    fn complete_transition(&mut self, cancelled: bool) {
        println!("host: transition complete (cancelled: {cancelled})");
    }
    fn set_chrome_opacity(&mut self, opacity: f32) {
        self.chrome_opacity = opacity;
    }
}

struct SimScreen {
    name: &'static str,
    image: ImageRef,
    frame: Rect,
    bounds: Rect,
    hidden: bool,
    opacity: f32,
}

impl ScreenDelegate for SimScreen {
    fn reference_image(&self) -> Option<ImageRef> {
        Some(self.image)
    }
    fn reference_frame(&self) -> Option<Rect> {
        Some(self.frame)
    }
    fn bounds(&self) -> Rect {
        self.bounds
    }
    fn transition_will_start(&mut self) {
        println!("{}: transition will start", self.name);
    }
    fn transition_did_end(&mut self) {
        println!("{}: transition did end", self.name);
    }
    fn set_reference_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}

fn run(coordinator: &mut TransitionCoordinator, host: &mut ConsoleHost, grid: &mut SimScreen, viewer: &mut SimScreen) {
    let dt = 1.0 / 60.0;
    let mut frame = 0;
    loop {
        let done = coordinator.tick(dt, host, grid, viewer);
        if frame % 6 == 0 || done {
            if let Some(proxy) = host.proxy_frame {
                println!(
                    "  t={:.2}s proxy=({:.0},{:.0} {:.0}x{:.0}) chrome={:.2}",
                    frame as f32 * dt,
                    proxy.x,
                    proxy.y,
                    proxy.width,
                    proxy.height,
                    host.chrome_opacity
                );
            }
        }
        if done {
            break;
        }
        frame += 1;
    }
}

fn main() {
    env_logger::init();

    let bounds = Rect::new(0.0, 0.0, 390.0, 844.0);
    let photo = ImageRef::new(1, Size::new(1600.0, 1200.0));

    let mut grid = SimScreen {
        name: "grid",
        image: photo,
        frame: Rect::new(10.0, 150.0, 124.0, 124.0),
        bounds,
        hidden: false,
        opacity: 1.0,
    };
    let mut viewer = SimScreen {
        name: "viewer",
        image: photo,
        frame: fit_rect(photo.aspect_ratio(), bounds),
        bounds,
        hidden: false,
        opacity: 1.0,
    };

    let mut host = ConsoleHost {
        chrome_opacity: 1.0,
        proxy_frame: None,
    };
    let mut coordinator = TransitionCoordinator::new();

    println!("== tap thumbnail: presenting ==");
    coordinator
        .begin(TransitionRole::Presenting, &mut host, &mut grid, &mut viewer)
        .expect("presenting should start");
    run(&mut coordinator, &mut host, &mut grid, &mut viewer);

    println!("\n== pan down: interactive dismissal ==");
    coordinator.set_interactive(true);
    coordinator
        .begin(TransitionRole::Dismissing, &mut host, &mut grid, &mut viewer)
        .expect("dismissal should start");

    // Finger drags 240pt down over 24 samples, then releases
    for step in 1..=24 {
        let y = step as f32 * 10.0;
        let sample = PanSample::new(
            GesturePhase::Changed,
            Point::new(4.0, y),
            Point::new(0.0, 600.0),
        );
        coordinator.pan(&sample, &mut host, &mut grid, &mut viewer);
    }
    let release = PanSample::new(
        GesturePhase::Ended,
        Point::new(4.0, 240.0),
        Point::new(0.0, 120.0),
    );
    coordinator.pan(&release, &mut host, &mut grid, &mut viewer);
    run(&mut coordinator, &mut host, &mut grid, &mut viewer);

    println!(
        "\ndone: grid opacity {:.1} (thumbnail hidden: {}), viewer opacity {:.1} (image hidden: {})",
        grid.opacity, grid.hidden, viewer.opacity, viewer.hidden
    );
}
