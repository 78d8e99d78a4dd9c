pub(crate) mod apply;
pub(crate) mod easing;
pub(crate) mod keyframe;
