use approx::assert_relative_eq;
use arbor_constants::{Input, KeywordRanges, LazyValue, Range, RangeSampler, SampleError};
use arbor_inputs::{InputView, Key, MappingInputs, Value};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn sampler_loads_from_json() {
    let sampler: RangeSampler = serde_json::from_str(
        r#"{
            "arg_ranges": { "slope": [0.0, 2.0], "intercept": [-1.0, 1.0] },
            "kwarg_ranges": { "noise": [0.0, 0.1] },
            "keyword_ranges": "declared"
        }"#,
    )
    .unwrap();

    assert_eq!(sampler.keyword_ranges(), KeywordRanges::Declared);
    assert_eq!(sampler.arg_ranges()["slope"], Range::new(0.0, 2.0).unwrap());

    let samples = sampler.sample(None, 4, 0);
    for sample in &samples {
        let keys: Vec<&str> = sample.keys().map(String::as_str).collect();
        assert_eq!(keys, ["slope", "intercept", "noise"]);
        assert!((0.0..0.1).contains(&sample["noise"]));
    }
}

#[test]
fn sampler_loads_from_yaml_and_toml() {
    let from_yaml: RangeSampler = serde_yaml::from_str("arg_ranges:\n  x: [0.0, 1.0]\n").unwrap();
    let from_toml: RangeSampler = toml::from_str("[arg_ranges]\nx = [0.0, 1.0]\n").unwrap();

    assert_eq!(from_yaml, from_toml);
    assert_eq!(from_yaml.keyword_ranges(), KeywordRanges::Positional);
    assert!(from_yaml.kwarg_ranges().is_empty());
}

#[test]
fn inverted_range_in_config_is_rejected() {
    let result = serde_json::from_str::<RangeSampler>(r#"{ "arg_ranges": { "x": [3.0, 1.0] } }"#);

    let message = result.unwrap_err().to_string();
    let expected = SampleError::InvalidRange {
        low: 3.0,
        high: 1.0,
    };
    assert!(
        message.contains(&expected.to_string()),
        "unexpected error: {message}"
    );
}

#[test]
fn sampler_round_trips_through_json() {
    let sampler = RangeSampler::new([("x", (0.0, 1.0))], [("y", (2.0, 3.0))])
        .unwrap()
        .with_keyword_ranges(KeywordRanges::Declared);

    let json = serde_json::to_string(&sampler).unwrap();
    let restored: RangeSampler = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, sampler);
}

#[test]
fn sampled_constants_feed_lazy_leaves() {
    let sampler = RangeSampler::new(
        [("low", (0.0, 1.0)), ("high", (1.0, 2.0))],
        [("unused", (5.0, 6.0))],
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = sampler.sample(Some(&mut rng), 3, 0);

    let leaves: Vec<_> = samples
        .iter()
        .map(|sample| {
            LazyValue::from_sample(
                |_, kwargs| {
                    let low = kwargs["low"].as_float().unwrap_or_default();
                    let high = kwargs["high"].as_float().unwrap_or_default();
                    high - low
                },
                "width",
                sample,
            )
        })
        .collect();

    for (leaf, sample) in leaves.iter().zip(&samples) {
        assert_eq!(leaf.arity(), 0);
        assert_relative_eq!(leaf.value(), sample["high"] - sample["low"]);
        assert!(leaf.value() > 0.0);
    }
}

#[test]
fn named_inputs_build_a_mapping_view() {
    let inputs = [Input::new("x", 0.5), Input::new("n", 4), Input::new("tag", "a")];
    let dtypes: Vec<_> = inputs.iter().map(|input| input.dtype).collect();

    let view = MappingInputs::new(inputs.into_iter().map(<(String, Value)>::from));

    assert_eq!(view.types(), dtypes.as_slice());
    assert_eq!(view.get(&Key::from("n")).unwrap(), Value::Int(4));
    assert_eq!(view.get(&Key::from(0)).unwrap(), Value::Float(0.5));
}
