use std::f64::consts::TAU;

use classic_synth::{
    AdditiveGenerator, AdditiveParams, FmGenerator, FmParams, Generator, GranularGenerator,
    GranularParams, KarplusStrongGenerator, KarplusStrongParams, SubtractiveGenerator,
    SubtractiveParams, SynthError, WavetableGenerator, WavetableParams,
};

#[test]
fn one_period_of_a440() {
    let params = AdditiveParams::new(vec![440.0], vec![1.0])
        .with_duration(1.0 / 440.0)
        .with_sample_rate(44_100.0);
    let buffer = AdditiveGenerator::new(params).unwrap().generate();

    // 44100 / 440 = 100.23 samples, rounded down.
    assert_eq!(buffer.len(), 100);
    assert_eq!(buffer[0], 0.0);

    for (i, &sample) in buffer.iter().enumerate() {
        let expected = (TAU * 440.0 * i as f64 / 44_100.0).sin();
        assert!((sample as f64 - expected).abs() < 1e-6, "sample {i}");
    }

    // Positive half first, then negative half.
    assert!(buffer[..50].iter().all(|&x| x >= 0.0));
    assert!(buffer[51..].iter().all(|&x| x <= 0.0));
    assert!(buffer.peak() > 0.999);
}

#[test]
fn grains_of_a_counting_signal() {
    let signal: Vec<f32> = (0..10).map(|i| i as f32).collect();
    let buffer = GranularGenerator::new(GranularParams::new(signal, 4, 0.5))
        .unwrap()
        .generate();
    let expected: [f32; 12] = [0.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0, 5.0, 4.0, 5.0, 6.0, 7.0];
    assert_eq!(buffer.as_slice(), &expected);
}

#[test]
fn granular_accepts_another_generators_output() {
    let source = FmGenerator::new(FmParams::new(220.0, 55.0, 2.0).with_duration(0.1))
        .unwrap()
        .generate();
    let granular = GranularGenerator::new(
        GranularParams::new(source.as_slice().to_vec(), 441, 0.25)
            .with_sample_rate(source.sample_rate()),
    )
    .unwrap();
    let buffer = granular.generate();

    assert_eq!(buffer.len(), granular.grain_count() * 441);
    let first_grain = &source[..441];
    assert_eq!(&buffer[..441], first_grain);
    let second_start = granular.step();
    assert_eq!(&buffer[441..882], &source[second_start..second_start + 441]);
}

#[test]
fn every_technique_behind_one_trait() {
    let generators: Vec<Box<dyn Generator>> = vec![
        Box::new(
            AdditiveGenerator::new(AdditiveParams::new(vec![220.0], vec![0.8]).with_duration(0.1))
                .unwrap(),
        ),
        Box::new(
            SubtractiveGenerator::new(SubtractiveParams::new(110.0, 2_000.0).with_duration(0.1))
                .unwrap(),
        ),
        Box::new(FmGenerator::new(FmParams::default().with_duration(0.1)).unwrap()),
        Box::new(WavetableGenerator::new(WavetableParams::default().with_duration(0.1)).unwrap()),
        Box::new(
            KarplusStrongGenerator::new(
                KarplusStrongParams::new(330.0).with_duration(0.1).with_seed(5),
            )
            .unwrap(),
        ),
    ];

    let mut names: Vec<&str> = generators.iter().map(|g| g.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), generators.len());

    for generator in &generators {
        let buffer = generator.generate();
        assert_eq!(buffer.len(), 4_410, "{}", generator.name());
        assert_eq!(buffer.sample_rate(), 44_100.0);
        assert!(buffer.iter().all(|x| x.is_finite()), "{}", generator.name());
        assert!(buffer.rms() > 0.0, "{}", generator.name());
    }
}

#[test]
fn generators_render_from_other_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KarplusStrongGenerator>();
    assert_send_sync::<SubtractiveGenerator>();

    let generator = std::sync::Arc::new(
        KarplusStrongGenerator::new(KarplusStrongParams::new(110.0).with_duration(0.05).with_seed(11))
            .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = std::sync::Arc::clone(&generator);
            std::thread::spawn(move || generator.generate())
        })
        .collect();
    let buffers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(buffers.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn configuration_errors_surface_at_construction() {
    let errors = [
        AdditiveGenerator::new(AdditiveParams::new(vec![1.0], vec![])).unwrap_err(),
        SubtractiveGenerator::new(SubtractiveParams::new(440.0, 22_050.0)).unwrap_err(),
        WavetableGenerator::new(WavetableParams::new(vec![], 440.0)).unwrap_err(),
        GranularGenerator::new(GranularParams::new(vec![0.0; 8], 1, 0.5)).unwrap_err(),
        KarplusStrongGenerator::new(KarplusStrongParams::new(-1.0)).unwrap_err(),
        FmGenerator::new(FmParams::default().with_sample_rate(0.0)).unwrap_err(),
    ];
    assert!(matches!(errors[0], SynthError::PartialCountMismatch { .. }));
    assert!(matches!(errors[1], SynthError::CutoffOutOfRange { .. }));
    assert!(matches!(errors[2], SynthError::EmptyWavetable));
    assert!(matches!(errors[3], SynthError::GrainStepTooSmall { .. }));
    assert!(matches!(errors[4], SynthError::NonPositive { param: "frequency", .. }));
    assert!(matches!(errors[5], SynthError::NonPositive { param: "sample_rate", .. }));
}

#[cfg(feature = "serde")]
#[test]
fn parameter_records_load_from_json() {
    let params: KarplusStrongParams =
        serde_json::from_str(r#"{ "frequency": 220.0, "seed": 3 }"#).unwrap();
    assert_eq!(params.frequency, 220.0);
    assert_eq!(params.seed, Some(3));
    assert_eq!(params.duration, classic_synth::DEFAULT_DURATION);

    let params: WavetableParams =
        serde_json::from_str(r#"{ "wavetable": [0.0, 1.0], "phase_law": "sample_rate" }"#)
            .unwrap();
    assert_eq!(params.phase_law, classic_synth::PhaseLaw::SampleRate);

    let additive = AdditiveParams::new(vec![110.0, 220.0], vec![0.5, 0.25]);
    let json = serde_json::to_string(&additive).unwrap();
    let back: AdditiveParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, additive);
}

#[test]
fn crate_root_constants() {
    assert_eq!(classic_synth::PCM16_SCALE, classic_synth::io::pcm::PCM16_SCALE);
    assert_eq!(classic_synth::io::pcm::to_pcm16(1.0) as f32, classic_synth::PCM16_SCALE);
    assert_eq!(classic_synth::DEFAULT_SAMPLE_RATE, 44_100.0);
}
