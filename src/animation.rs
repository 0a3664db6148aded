use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Bar width at either end of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Percent(u8),
    /// Read from the element's `data-value` attribute at play time.
    DataValue,
}

/// Visual state of an element at one end of a tween. Unset fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
}

impl Pose {
    /// Faded out and shifted down by `y` pixels.
    pub fn hidden_below(y: f32) -> Self {
        Pose { y: Some(y), opacity: Some(0.0), ..Pose::default() }
    }

    pub fn hidden_beside(x: f32) -> Self {
        Pose { x: Some(x), opacity: Some(0.0), ..Pose::default() }
    }

    pub fn shrunk(scale: f32) -> Self {
        Pose { scale: Some(scale), opacity: Some(0.0), ..Pose::default() }
    }

    /// Resting state matching whichever fields `from` animates.
    pub fn settled(from: &Pose) -> Self {
        Pose {
            x: from.x.map(|_| 0.0),
            y: from.y.map(|_| 0.0),
            opacity: from.opacity.map(|_| 1.0),
            scale: from.scale.map(|_| 1.0),
            width: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Power2Out,
    Power3Out,
}

/// Where a tween sits on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Seconds from the start of the timeline.
    At(f32),
    /// Seconds relative to the end of the previous tween; negative overlaps.
    AfterPrevious(f32),
}

impl Default for Position {
    fn default() -> Self {
        Position::At(0.0)
    }
}

/// Plays a tween once its trigger crosses `start` percent of the viewport height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollTrigger {
    /// Element that triggers; `None` means each animated element triggers itself.
    pub trigger: Option<String>,
    pub start: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tween {
    pub selector: String,
    pub from: Pose,
    pub to: Pose,
    /// Seconds.
    pub duration: f32,
    /// Extra delay per matched element, in seconds.
    pub stagger: f32,
    pub delay: f32,
    pub ease: Ease,
    pub position: Position,
    /// Mirror `x` on every other matched element.
    pub alternate: bool,
    pub scroll: Option<ScrollTrigger>,
}

impl Tween {
    pub fn from_to(selector: &str, from: Pose, duration: f32) -> Self {
        Tween {
            selector: selector.to_string(),
            to: Pose::settled(&from),
            from,
            duration,
            stagger: 0.0,
            delay: 0.0,
            ease: Ease::default(),
            position: Position::default(),
            alternate: false,
            scroll: None,
        }
    }

    pub fn stagger(mut self, seconds: f32) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn after_previous(mut self, offset: f32) -> Self {
        self.position = Position::AfterPrevious(offset);
        self
    }

    pub fn on_scroll(mut self, trigger: Option<&str>, start: u8) -> Self {
        self.scroll = Some(ScrollTrigger { trigger: trigger.map(str::to_string), start });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub name: String,
    pub tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(name: &str, tweens: Vec<Tween>) -> Self {
        Timeline { name: name.to_string(), tweens }
    }

    /// Heading, copy, call-to-action buttons, then the floating decorations.
    pub fn hero(container: &str) -> Self {
        Timeline::new(
            "hero",
            vec![
                Tween::from_to(&format!("{} h1", container), Pose::hidden_below(50.0), 1.0)
                    .ease(Ease::Power3Out),
                Tween::from_to(&format!("{} p", container), Pose::hidden_below(30.0), 0.8)
                    .ease(Ease::Power3Out)
                    .after_previous(-0.6),
                Tween::from_to(&format!("{} .cta-button", container), Pose::hidden_below(20.0), 0.6)
                    .ease(Ease::Power3Out)
                    .after_previous(-0.4),
                Tween::from_to(&format!("{} .decoration", container), Pose::shrunk(0.8), 1.2)
                    .ease(Ease::Power3Out)
                    .stagger(0.1)
                    .after_previous(-0.8),
            ],
        )
    }

    /// Cards rising into place; replayed whenever a filtered grid changes.
    pub fn entrance(selector: &str, y: f32) -> Self {
        Timeline::new(
            "entrance",
            vec![Tween::from_to(selector, Pose::hidden_below(y), 0.5).stagger(0.1)],
        )
    }

    pub fn scroll_reveal() -> Self {
        Timeline::new(
            "scroll-reveal",
            vec![Tween::from_to(".scroll-animate", Pose::hidden_below(40.0), 0.8).on_scroll(None, 80)],
        )
    }

    /// Journey entries slide in from alternating sides.
    pub fn timeline_items() -> Self {
        let mut tween =
            Tween::from_to(".timeline-item", Pose::hidden_beside(-50.0), 0.8).on_scroll(None, 80);
        tween.alternate = true;
        Timeline::new("timeline-items", vec![tween])
    }

    /// Proficiency bars grow from empty to their `data-value` width.
    pub fn skill_bars() -> Self {
        let mut tween = Tween::from_to(
            ".skill-progress .progress-bar",
            Pose { width: Some(Width::Percent(0)), ..Pose::default() },
            1.5,
        )
        .on_scroll(None, 90);
        tween.to = Pose { width: Some(Width::DataValue), ..Pose::default() };
        Timeline::new("skill-bars", vec![tween])
    }

    pub fn contact_intro() -> Self {
        Timeline::new(
            "contact-intro",
            vec![
                Tween::from_to(".contact-info-item", Pose::hidden_below(30.0), 0.6).stagger(0.1),
                Tween::from_to(".contact-form", Pose::hidden_below(50.0), 0.8).delay(0.3),
                Tween::from_to(".social-btn", Pose::shrunk(0.8), 0.4).stagger(0.1).delay(0.6),
            ],
        )
    }

    pub fn home_sections() -> Self {
        Timeline::new(
            "home-sections",
            vec![
                Tween::from_to(".skill-item", Pose::hidden_below(30.0), 0.6)
                    .stagger(0.1)
                    .on_scroll(Some(".skills-section"), 80),
                Tween::from_to(".featured-project", Pose::hidden_below(50.0), 0.8)
                    .stagger(0.2)
                    .on_scroll(Some(".projects-section"), 75),
                Tween::from_to(".blog-card", Pose::hidden_below(50.0), 0.8)
                    .stagger(0.2)
                    .ease(Ease::Power3Out)
                    .on_scroll(Some(".blog-section"), 80),
            ],
        )
    }

    pub fn tools_grid() -> Self {
        Timeline::new(
            "tools",
            vec![Tween::from_to(".tool-item", Pose::hidden_below(30.0), 0.5)
                .stagger(0.1)
                .on_scroll(Some(".tools-section"), 75)],
        )
    }
}

/// Opaque reference to a timeline a stage is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub(crate) usize);

/// Something that can play timelines and undo them.
pub trait Stage {
    fn play(&self, timeline: &Timeline) -> Handle;

    /// Stop the timeline and restore every element it touched.
    fn revert(&self, handle: Handle);
}

/// Owns every timeline started for one rendered view. Dropping the context
/// reverts them, newest first.
pub struct AnimationContext<'s> {
    stage: &'s dyn Stage,
    handles: Vec<Handle>,
}

impl<'s> AnimationContext<'s> {
    pub fn new(stage: &'s dyn Stage) -> Self {
        AnimationContext { stage, handles: Vec::new() }
    }

    pub fn attach(stage: &'s dyn Stage, timelines: Vec<Timeline>) -> Self {
        let mut ctx = AnimationContext::new(stage);
        for timeline in &timelines {
            ctx.play(timeline);
        }
        ctx
    }

    pub fn play(&mut self, timeline: &Timeline) {
        let handle = self.stage.play(timeline);
        self.handles.push(handle);
    }
}

impl Drop for AnimationContext<'_> {
    fn drop(&mut self) {
        while let Some(handle) = self.handles.pop() {
            self.stage.revert(handle);
        }
    }
}

/// Replays an entrance timeline when the set of rendered items changes.
/// Page routes build one per request, so there every render is a fresh attach.
pub struct EntranceHook<'s> {
    stage: &'s dyn Stage,
    fingerprint: Option<u64>,
    context: Option<AnimationContext<'s>>,
}

impl<'s> EntranceHook<'s> {
    pub fn new(stage: &'s dyn Stage) -> Self {
        EntranceHook { stage, fingerprint: None, context: None }
    }

    /// Returns true when a new timeline was started.
    pub fn observe<I: Hash>(&mut self, items: &[I], timeline: Timeline) -> bool {
        let mut hasher = DefaultHasher::new();
        items.hash(&mut hasher);
        let fingerprint = hasher.finish();

        if self.fingerprint == Some(fingerprint) {
            return false;
        }
        // Revert the previous run before the new one starts.
        self.context = None;
        self.fingerprint = Some(fingerprint);
        self.context = Some(AnimationContext::attach(self.stage, vec![timeline]));
        true
    }
}

/// Server-side stage: live timelines end up as a JSON block in the page and
/// are played in the browser by `ANIMATION_JS`.
#[derive(Default)]
pub struct ScriptStage {
    slots: RefCell<Vec<Option<Timeline>>>,
}

impl ScriptStage {
    pub fn new() -> Self {
        ScriptStage::default()
    }

    /// Timelines that have been played and not reverted, in play order.
    pub fn live(&self) -> Vec<Timeline> {
        self.slots.borrow().iter().flatten().cloned().collect()
    }

    pub fn render_script(&self) -> String {
        let live = self.live();
        if live.is_empty() {
            return String::new();
        }
        let json = serde_json::to_string(&live)
            .unwrap_or_else(|_| "[]".to_string())
            .replace("</", "<\\/");
        format!(
            "<script type=\"application/json\" id=\"folio-timelines\">{}</script>\n<script>{}</script>",
            json, ANIMATION_JS
        )
    }
}

impl Stage for ScriptStage {
    fn play(&self, timeline: &Timeline) -> Handle {
        let mut slots = self.slots.borrow_mut();
        slots.push(Some(timeline.clone()));
        Handle(slots.len() - 1)
    }

    fn revert(&self, handle: Handle) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(handle.0) {
            *slot = None;
        }
    }
}

pub const ANIMATION_JS: &str = r#"
(function(){
  var data = document.getElementById('folio-timelines');
  if (!data || !Element.prototype.animate) return;
  if (window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches) return;
  var timelines;
  try { timelines = JSON.parse(data.textContent); } catch (e) { return; }
  var EASE = { power2_out: 'cubic-bezier(0.215, 0.61, 0.355, 1)', power3_out: 'cubic-bezier(0.165, 0.84, 0.44, 1)' };

  function width(w, el) {
    if (w === 'data_value') return el.getAttribute('data-value') || (el.parentElement && el.parentElement.getAttribute('data-value')) || '0%';
    return w.percent + '%';
  }
  function frame(pose, el, flip) {
    var f = {};
    if (pose.x !== undefined || pose.y !== undefined || pose.scale !== undefined) {
      var x = (pose.x || 0) * (flip ? -1 : 1);
      f.transform = 'translate(' + x + 'px,' + (pose.y || 0) + 'px) scale(' + (pose.scale === undefined ? 1 : pose.scale) + ')';
    }
    if (pose.opacity !== undefined) f.opacity = pose.opacity;
    if (pose.width !== undefined) f.width = width(pose.width, el);
    return f;
  }
  function build(tw, start) {
    var els = Array.prototype.slice.call(document.querySelectorAll(tw.selector));
    return els.map(function(el, i){
      var flip = tw.alternate && i % 2 === 1;
      var a = el.animate([frame(tw.from, el, flip), frame(tw.to, el, flip)], {
        duration: tw.duration * 1000,
        delay: (start + tw.delay + tw.stagger * i) * 1000,
        easing: EASE[tw.ease] || 'ease-out',
        fill: 'both'
      });
      a.pause();
      return { el: el, anim: a };
    });
  }
  function observe(target, start, fn) {
    var io = new IntersectionObserver(function(entries){
      entries.forEach(function(e){ if (e.isIntersecting) { fn(); io.disconnect(); } });
    }, { rootMargin: '0px 0px -' + (100 - start) + '% 0px' });
    io.observe(target);
  }

  timelines.forEach(function(tl){
    var end = 0;
    tl.tweens.forEach(function(tw){
      var start = tw.position.at !== undefined ? tw.position.at : end + tw.position.after_previous;
      start = Math.max(0, start);
      end = Math.max(end, start + tw.delay + tw.duration);
      var runs = build(tw, tw.scroll ? 0 : start);
      if (!tw.scroll) { runs.forEach(function(r){ r.anim.play(); }); return; }
      if (tw.scroll.trigger) {
        var t = document.querySelector(tw.scroll.trigger);
        if (!t) { runs.forEach(function(r){ r.anim.play(); }); return; }
        observe(t, tw.scroll.start, function(){ runs.forEach(function(r){ r.anim.play(); }); });
      } else {
        runs.forEach(function(r){ observe(r.el, tw.scroll.start, function(){ r.anim.play(); }); });
      }
    });
  });
})();
"#;
