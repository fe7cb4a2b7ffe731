use crate::prelude::*;

/// the drawing area the chart lives in
pub trait Viewport: Send + Sync {
    /// current width and height
    fn size(&self) -> Vector2;
}

/// where current data comes from.
/// a monitor subscribes when it's mounted and unsubscribes when it's torn down
#[async_trait]
pub trait CurrentDataService: Send + Sync {
    /// `None` samples mean the service has no data right now
    async fn subscribe(&self, id: &str) -> AsyncUnboundedReceiver<Option<Summary>>;
    async fn unsubscribe(&self, id: &str);
}

/// keeps a chart up to date while it's on screen
pub struct EnergyMonitor {
    id: String,
    chart: Arc<RwLock<EnergyMonitorChart>>,
    data_service: Arc<dyn CurrentDataService>,
    tasks: Vec<JoinHandle<()>>,
}
impl EnergyMonitor {
    pub async fn mount(
        id: impl ToString,
        chart: Arc<RwLock<EnergyMonitorChart>>,
        viewport: Arc<dyn Viewport>,
        resize_events: AsyncUnboundedReceiver<Vector2>,
        data_service: Arc<dyn CurrentDataService>,
    ) -> Self {
        let id = id.to_string();
        let settings = chart.read().settings().clone();
        debug!("mounting energy monitor '{id}'");

        let samples = data_service.subscribe(&id).await;
        let tasks = vec![
            tokio::spawn(Self::resize_task(chart.clone(), viewport, resize_events, settings.resize_debounce(), settings.resize_delay())),
            tokio::spawn(Self::sample_task(chart.clone(), samples)),
            tokio::spawn(Self::animation_task(chart.clone(), settings.animation_interval())),
        ];

        Self {
            id,
            chart,
            data_service,
            tasks,
        }
    }

    /// stop redrawing and let go of the data subscription
    pub async fn unmount(mut self) {
        debug!("unmounting energy monitor '{}'", self.id);
        self.stop();
        self.data_service.unsubscribe(&self.id).await;
        self.chart.write().hide_flows();
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn chart(&self) -> Arc<RwLock<EnergyMonitorChart>> { self.chart.clone() }
    pub fn is_mounted(&self) -> bool { !self.tasks.is_empty() }

    fn stop(&mut self) {
        self.tasks.drain(..).for_each(|t| t.abort());
    }

    fn measure(chart: &RwLock<EnergyMonitorChart>, viewport: &dyn Viewport) {
        let size = viewport.size();
        chart.write().on_resize(size);
    }

    async fn resize_task(
        chart: Arc<RwLock<EnergyMonitorChart>>,
        viewport: Arc<dyn Viewport>,
        mut events: AsyncUnboundedReceiver<Vector2>,
        debounce: Duration,
        delay: Duration,
    ) {
        // first layout
        tokio::time::sleep(delay).await;
        Self::measure(&chart, &*viewport);

        while let Some(size) = events.recv().await {
            trace!("window resizing ({size})");

            // swallow the rest of the burst
            loop {
                match tokio::time::timeout(debounce, events.recv()).await {
                    Ok(Some(_)) => continue,
                    Ok(None) => return,
                    Err(_) => break,
                }
            }

            // let the layout settle before measuring
            tokio::time::sleep(delay).await;
            Self::measure(&chart, &*viewport);
        }
    }

    async fn sample_task(chart: Arc<RwLock<EnergyMonitorChart>>, mut samples: AsyncUnboundedReceiver<Option<Summary>>) {
        while let Some(sample) = samples.recv().await {
            chart.write().on_new_sample(sample.as_ref());
        }
        debug!("current data subscription closed");
    }

    async fn animation_task(chart: Arc<RwLock<EnergyMonitorChart>>, period: Duration) {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        // the first tick is immediate
        interval.tick().await;

        loop {
            interval.tick().await;
            chart.write().switch_flow_states();
        }
    }
}
impl Drop for EnergyMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}


#[cfg(test)]
mod test {
    use super::*;

    const ID: &str = "energy-monitor";

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    struct TestViewport {
        size: Mutex<Vector2>,
        measured: AtomicUsize,
    }
    impl Viewport for TestViewport {
        fn size(&self) -> Vector2 {
            self.measured.fetch_add(1, SeqCst);
            *self.size.lock()
        }
    }
    impl TestViewport {
        fn measured(&self) -> usize { self.measured.load(SeqCst) }
    }

    #[derive(Default)]
    struct TestDataService {
        sender: Mutex<Option<AsyncUnboundedSender<Option<Summary>>>>,
        subscribed: Mutex<Vec<String>>,
        unsubscribed: Mutex<Vec<String>>,
    }
    #[async_trait]
    impl CurrentDataService for TestDataService {
        async fn subscribe(&self, id: &str) -> AsyncUnboundedReceiver<Option<Summary>> {
            let (sender, receiver) = async_unbounded_channel();
            *self.sender.lock() = Some(sender);
            self.subscribed.lock().push(id.to_owned());
            receiver
        }
        async fn unsubscribe(&self, id: &str) {
            self.sender.lock().take();
            self.unsubscribed.lock().push(id.to_owned());
        }
    }
    impl TestDataService {
        fn send(&self, sample: Option<Summary>) {
            if let Some(sender) = &*self.sender.lock() {
                let _ = sender.send(sample);
            }
        }
    }

    struct Setup {
        monitor: EnergyMonitor,
        chart: Arc<RwLock<EnergyMonitorChart>>,
        viewport: Arc<TestViewport>,
        resize: AsyncUnboundedSender<Vector2>,
        data: Arc<TestDataService>,
    }

    async fn mount() -> Setup {
        let chart = Arc::new(RwLock::new(EnergyMonitorChart::default()));
        let viewport = Arc::new(TestViewport {
            size: Mutex::new(Vector2::new(300.0, 300.0)),
            measured: AtomicUsize::new(0),
        });
        let data = Arc::new(TestDataService::default());
        let (resize, resize_events) = async_unbounded_channel();

        let monitor = EnergyMonitor::mount(ID, chart.clone(), viewport.clone(), resize_events, data.clone()).await;
        Setup { monitor, chart, viewport, resize, data }
    }

    fn sample() -> Summary {
        let mut summary = Summary::default();
        summary.production.active_power = Some(800.0);
        summary.system.in_power = Some(1000.0);
        summary
    }

    #[tokio::test(start_paused = true)]
    async fn measures_once_after_first_layout() {
        let setup = mount().await;
        assert!(setup.monitor.is_mounted());
        assert_eq!(*setup.data.subscribed.lock(), vec![ID.to_owned()]);
        assert_eq!(setup.viewport.measured(), 0);

        tokio::time::sleep(ms(150)).await;
        assert_eq!(setup.viewport.measured(), 1);
        assert_eq!(setup.chart.read().radii().0, 150.0);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_burst_recalculates_once() {
        let setup = mount().await;
        tokio::time::sleep(ms(150)).await;
        assert_eq!(setup.viewport.measured(), 1);

        *setup.viewport.size.lock() = Vector2::new(500.0, 400.0);
        for i in 0..10 {
            setup.resize.send(Vector2::new(300.0 + i as f32 * 20.0, 300.0)).unwrap();
            tokio::time::sleep(ms(5)).await;
        }

        // still inside the debounce window
        tokio::time::sleep(ms(100)).await;
        assert_eq!(setup.viewport.measured(), 1);
        assert_eq!(setup.chart.read().radii().0, 150.0);

        tokio::time::sleep(ms(300)).await;
        assert_eq!(setup.viewport.measured(), 2);
        assert_eq!(setup.chart.read().radii().0, 200.0);

        // a second burst gets its own recalculation
        setup.resize.send(Vector2::new(10.0, 10.0)).unwrap();
        tokio::time::sleep(ms(400)).await;
        assert_eq!(setup.viewport.measured(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn broken_measurement_keeps_layout() {
        let setup = mount().await;
        tokio::time::sleep(ms(150)).await;

        *setup.viewport.size.lock() = Vector2::new(f32::INFINITY, f32::INFINITY);
        setup.resize.send(Vector2::ZERO).unwrap();
        tokio::time::sleep(ms(400)).await;

        assert_eq!(setup.viewport.measured(), 2);
        assert_eq!(setup.chart.read().radii().0, 150.0);
        assert!(!setup.chart.read().production().outline_path().contains("inf"));
    }

    #[tokio::test(start_paused = true)]
    async fn samples_reach_the_chart() {
        let setup = mount().await;
        tokio::time::sleep(ms(150)).await;

        setup.data.send(Some(sample()));
        tokio::time::sleep(ms(1)).await;
        assert_eq!(setup.chart.read().production().value_text(), "800 W");

        setup.data.send(None);
        tokio::time::sleep(ms(1)).await;
        assert_eq!(setup.chart.read().production().value_text(), "");
        assert_eq!(setup.chart.read().production().flow().points(), HIDDEN_POINTS);
    }

    #[tokio::test(start_paused = true)]
    async fn flows_pulse() {
        let setup = mount().await;
        assert_eq!(setup.chart.read().production().flow().state(), FlowState::One);

        tokio::time::sleep(ms(1500)).await;
        assert_eq!(setup.chart.read().production().flow().state(), FlowState::Two);
        tokio::time::sleep(ms(1000)).await;
        assert_eq!(setup.chart.read().production().flow().state(), FlowState::One);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_stops_redrawing() {
        let Setup { monitor, chart, viewport, resize, data } = mount().await;
        tokio::time::sleep(ms(150)).await;
        assert_eq!(viewport.measured(), 1);

        monitor.unmount().await;
        assert_eq!(*data.unsubscribed.lock(), vec![ID.to_owned()]);
        assert!(data.sender.lock().is_none());

        let _ = resize.send(Vector2::new(800.0, 800.0));
        tokio::time::sleep(ms(3000)).await;

        assert_eq!(viewport.measured(), 1);
        assert_eq!(chart.read().radii().0, 150.0);
        for view in chart.read().views() {
            assert_eq!(view.flow_state, FlowState::Three);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_stops_redrawing() {
        let Setup { monitor, viewport, resize, .. } = mount().await;
        drop(monitor);

        let _ = resize.send(Vector2::new(800.0, 800.0));
        tokio::time::sleep(ms(1000)).await;
        assert_eq!(viewport.measured(), 0);
    }
}
