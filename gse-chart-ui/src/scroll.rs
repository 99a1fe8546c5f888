//! Scroll sampling.
//!
//! A small script installed with `document::eval` posts a [`ScrollSample`]
//! on load, on every passive scroll event and on resize. Chapter sections
//! are found by a `data-chapter` attribute. The listeners are removed when
//! the hook's component unmounts, and a second install replaces the first.

use dioxus::prelude::*;
use gse_viz::ScrollSample;

use crate::state::AppState;

const SCROLL_SCRIPT: &str = r#"
    if (window.__gseScrollTeardown) window.__gseScrollTeardown();
    function sample() {
        var doc = document.documentElement;
        var tops = Array.prototype.map.call(
            document.querySelectorAll('[data-chapter]'),
            function(el) { return el.getBoundingClientRect().top; }
        );
        dioxus.send({
            scrollTop: window.scrollY || doc.scrollTop || 0,
            scrollHeight: doc.scrollHeight,
            clientHeight: doc.clientHeight,
            viewportHeight: window.innerHeight,
            chapterTops: tops
        });
    }
    var pending = false;
    function schedule() {
        if (pending) return;
        pending = true;
        requestAnimationFrame(function() { pending = false; sample(); });
    }
    window.addEventListener('scroll', schedule, { passive: true });
    window.addEventListener('resize', schedule);
    window.__gseScrollTeardown = function() {
        window.removeEventListener('scroll', schedule);
        window.removeEventListener('resize', schedule);
        delete window.__gseScrollTeardown;
    };
    sample();
    await new Promise(function() {});
"#;

const SCROLL_TEARDOWN: &str = "if (window.__gseScrollTeardown) window.__gseScrollTeardown();";

/// Feed scroll samples into the page progress and narrative signals for as
/// long as the calling component is mounted.
pub fn use_scroll_sync(mut state: AppState) {
    use_future(move || async move {
        let mut channel = document::eval(SCROLL_SCRIPT);
        loop {
            match channel.recv::<ScrollSample>().await {
                Ok(sample) => {
                    state.page_progress.set(sample.page_progress());
                    // only write when the chapter changes so readers are not woken on every frame
                    let changed = state.narrative.peek().clone().observe(&sample);
                    if changed {
                        state.narrative.write().observe(&sample);
                    }
                }
                Err(err) => {
                    log::warn!("[GSE] scroll channel closed: {err:?}");
                    break;
                }
            }
        }
    });
    use_drop(|| {
        let _ = document::eval(SCROLL_TEARDOWN);
    });
}
