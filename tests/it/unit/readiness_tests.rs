//! Unit tests for readiness aggregation over many instances.

use crate::helpers::{TestSliderBuilder, decoded, failed};
use imgslider::{ImageRole, ReadinessSummary, SliderStatus, summarize};

#[test]
fn test_summary_over_instances() {
    let ready = TestSliderBuilder::new().ready();

    let mut broken = TestSliderBuilder::new().mounted();
    broken.on_image_load(ImageRole::After, failed("404"));

    let mut loading = TestSliderBuilder::new().mounted();
    loading.on_image_load(ImageRole::Before, decoded(800.0, 400.0));

    let summary = summarize([&ready, &broken, &loading]);
    assert_eq!(
        summary,
        ReadinessSummary {
            total: 3,
            ready: 1,
            failed: 1,
            pending: 1,
        }
    );
    assert!(!summary.all_settled());
    assert!(!summary.all_ready());
    assert_eq!(loading.status(), SliderStatus::Loading);
}

#[test]
fn test_summary_settles_once_loads_finish() {
    let a = TestSliderBuilder::new().ready();
    let mut b = TestSliderBuilder::new().mounted();
    b.on_image_load(ImageRole::Before, failed("decode error"));
    // Later success for the other image does not revive a failed gate
    b.on_image_load(ImageRole::After, decoded(800.0, 400.0));

    let summary = summarize([&a, &b]);
    assert!(summary.all_settled());
    assert!(!summary.all_ready());
    assert_eq!(b.status(), SliderStatus::Failed);
}

#[test]
fn test_empty_summary_is_ready() {
    let summary = ReadinessSummary::collect(std::iter::empty());
    assert!(summary.all_settled());
    assert!(summary.all_ready());
}

#[test]
fn test_summary_serializes() {
    let slider = TestSliderBuilder::new().ready();
    let summary = summarize([&slider]);
    insta::assert_json_snapshot!(summary, @r###"
    {
      "total": 1,
      "ready": 1,
      "failed": 0,
      "pending": 0
    }
    "###);
}
