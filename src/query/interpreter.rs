//! Draw expression evaluation.

use super::expression::DrawExpression;
use super::keep::KeepList;
use super::range::apply_range;
use crate::config::QueryConfig;
use crate::error::{Error, Result};
use crate::hist::{
    Histogram1D, Histogram2D, Histogram3D, HistogramN, HistogramSource, MetaTable,
};
use crate::render::{DrawOptions, Drawable, Renderer};
use std::rc::Rc;

/// A projection, tagged by its dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub enum Projected {
    /// One kept axis.
    One(Histogram1D),
    /// Two kept axes.
    Two(Histogram2D),
    /// Three kept axes.
    Three(Histogram3D),
    /// More than three kept axes. Not drawable.
    Higher(HistogramN),
}

impl Projected {
    /// Tag a projection by its dimensionality.
    ///
    /// # Errors
    ///
    /// Never fails for a histogram built by [`HistogramN::new`].
    pub fn from_histogram(his: HistogramN) -> Result<Self> {
        Ok(match his.dimensions() {
            1 => Projected::One(his.try_into()?),
            2 => Projected::Two(his.try_into()?),
            3 => Projected::Three(his.try_into()?),
            _ => Projected::Higher(his),
        })
    }

    /// The underlying histogram.
    #[must_use]
    pub fn histogram(&self) -> &HistogramN {
        match self {
            Projected::One(h) => h.as_histogram(),
            Projected::Two(h) => h.as_histogram(),
            Projected::Three(h) => h.as_histogram(),
            Projected::Higher(h) => h,
        }
    }

    /// The underlying histogram, mutably.
    pub fn histogram_mut(&mut self) -> &mut HistogramN {
        match self {
            Projected::One(h) => h.as_histogram_mut(),
            Projected::Two(h) => h.as_histogram_mut(),
            Projected::Three(h) => h.as_histogram_mut(),
            Projected::Higher(h) => h,
        }
    }

    /// Unwrap into the underlying histogram.
    #[must_use]
    pub fn into_histogram(self) -> HistogramN {
        match self {
            Projected::One(h) => h.into_inner(),
            Projected::Two(h) => h.into_inner(),
            Projected::Three(h) => h.into_inner(),
            Projected::Higher(h) => h,
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.histogram().dimensions()
    }

    /// Renderer view, `None` above three axes.
    #[must_use]
    pub fn drawable(&self) -> Option<Drawable<'_>> {
        match self {
            Projected::One(h) => Some(Drawable::One(h)),
            Projected::Two(h) => Some(Drawable::Two(h)),
            Projected::Three(h) => Some(Drawable::Three(h)),
            Projected::Higher(_) => None,
        }
    }

    /// Whether a renderer can draw it.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        !matches!(self, Projected::Higher(_))
    }
}

/// Result of evaluating a draw expression.
#[derive(Debug, Clone)]
pub enum DrawOutcome {
    /// A fresh projection owned by the caller. The input was released; the
    /// projection was drawn if it is drawable.
    Projected(Projected),
    /// No projection requested: the resolved histogram itself, not drawn.
    Unprojected(Rc<HistogramN>),
}

impl DrawOutcome {
    /// Whether the interpreter released the resolved input.
    #[must_use]
    pub fn input_consumed(&self) -> bool {
        matches!(self, DrawOutcome::Projected(_))
    }

    /// Whether a draw call was issued.
    #[must_use]
    pub fn was_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Projected(p) if p.is_drawable())
    }

    /// The produced (or resolved) histogram.
    #[must_use]
    pub fn histogram(&self) -> &HistogramN {
        match self {
            DrawOutcome::Projected(p) => p.histogram(),
            DrawOutcome::Unprojected(h) => h,
        }
    }

    /// Number of axes of [`DrawOutcome::histogram`].
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.histogram().dimensions()
    }

    /// The projection, if one was made.
    #[must_use]
    pub fn projected(&self) -> Option<&Projected> {
        match self {
            DrawOutcome::Projected(p) => Some(p),
            DrawOutcome::Unprojected(_) => None,
        }
    }
}

/// Evaluates draw expressions against a histogram store.
///
/// # Example
///
/// ```rust
/// use trueno_painter::hist::{Axis, HistogramN, HistogramStore};
/// use trueno_painter::query::QueryInterpreter;
/// use trueno_painter::render::RecordingRenderer;
///
/// let axes = vec![Axis::indexed(10).unwrap(), Axis::indexed(5).unwrap()];
/// let store: HistogramStore = [HistogramN::new("hisX", axes).unwrap()].into_iter().collect();
///
/// let mut renderer = RecordingRenderer::new();
/// let outcome = QueryInterpreter::new()
///     .store(&store)
///     .draw("hisX(2,4)(0)()()", &mut renderer)
///     .unwrap();
/// assert_eq!(outcome.dimensions(), 1);
/// assert_eq!(renderer.last().unwrap().primary_range, (2, 4));
/// ```
#[derive(Clone, Default)]
pub struct QueryInterpreter<'a> {
    store: Option<&'a dyn HistogramSource>,
    fallback: Option<&'a dyn HistogramSource>,
    metadata: Option<&'a MetaTable>,
    config: QueryConfig,
}

impl std::fmt::Debug for QueryInterpreter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInterpreter")
            .field("store", &self.store.is_some())
            .field("fallback", &self.fallback.is_some())
            .field("metadata", &self.metadata)
            .field("config", &self.config)
            .finish()
    }
}

impl<'a> QueryInterpreter<'a> {
    /// Create an interpreter with no sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary histogram source.
    #[must_use]
    pub fn store(mut self, store: &'a dyn HistogramSource) -> Self {
        self.store = Some(store);
        self
    }

    /// Source consulted when the primary store is absent or misses.
    #[must_use]
    pub fn fallback(mut self, fallback: &'a dyn HistogramSource) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Axis metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: &'a MetaTable) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Find `name` in the store, then in the fallback source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither source has it.
    pub fn resolve(&self, name: &str) -> Result<Rc<HistogramN>> {
        let fallback = if self.config.fallback { self.fallback } else { None };
        self.store
            .and_then(|store| store.find(name))
            .or_else(|| fallback.and_then(|source| source.find(name)))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Parse and evaluate `expression`, drawing the result on `renderer`.
    ///
    /// The name is resolved as soon as the parentheses balance, before the
    /// clauses are read. Failures are logged; a missing histogram at info
    /// level, anything else as a warning. No draw call is made when an error
    /// is returned.
    pub fn draw(&self, expression: &str, renderer: &mut dyn Renderer) -> Result<DrawOutcome> {
        let result = DrawExpression::name_of(expression)
            .and_then(|name| self.resolve(name))
            .and_then(|input| {
                let expr = DrawExpression::parse(expression)?;
                self.project(&expr, input, renderer)
            });
        if let Err(err) = &result {
            if err.is_informational() {
                tracing::info!(expression, %err, "nothing to draw");
            } else {
                tracing::warn!(expression, %err, "draw expression rejected");
            }
        }
        result
    }

    /// Evaluate a parsed expression.
    pub fn evaluate(
        &self,
        expr: &DrawExpression,
        renderer: &mut dyn Renderer,
    ) -> Result<DrawOutcome> {
        let input = self.resolve(&expr.name)?;
        self.project(expr, input, renderer)
    }

    fn project(
        &self,
        expr: &DrawExpression,
        input: Rc<HistogramN>,
        renderer: &mut dyn Renderer,
    ) -> Result<DrawOutcome> {
        if !expr.has_projection() {
            tracing::debug!(histogram = %expr.name, "no projection requested");
            return Ok(DrawOutcome::Unprojected(input));
        }

        let requested = expr.projection.len();
        if requested > input.dimensions() {
            return Err(Error::DimensionMismatch {
                name: expr.name.clone(),
                requested,
                available: input.dimensions(),
            });
        }

        let mut projected = Projected::from_histogram(input.projection(&expr.projection)?)?;
        // Release the input as soon as the projection exists.
        drop(input);
        self.apply_axis_titles(projected.histogram_mut());

        if projected.is_drawable() {
            apply_range(projected.histogram_mut(), &expr.range)?;
            if let Some(plot) = projected.drawable() {
                renderer.draw(plot, &DrawOptions::new(&expr.operation, &expr.option))?;
            }
            tracing::debug!(
                histogram = %expr.name,
                dimensions = requested,
                "projection drawn"
            );
        } else {
            tracing::debug!(
                histogram = %expr.name,
                dimensions = requested,
                "projection has too many axes to draw"
            );
        }

        Ok(DrawOutcome::Projected(projected))
    }

    fn apply_axis_titles(&self, his: &mut HistogramN) {
        let Some(meta) = self.metadata.filter(|_| self.config.axis_titles) else {
            return;
        };
        for index in 0..his.dimensions() {
            if let Some(axis) = his.axis_mut(index).filter(|a| !a.name().is_empty()) {
                if let Some(title) = meta.axis_title(axis.name()) {
                    axis.set_title(title);
                }
            }
        }
    }
}

/// Evaluate `expression` against `store` with default settings.
///
/// `keep` is the caller's retention list. It is carried through the call
/// untouched; retaining the outcome is up to the caller.
///
/// # Errors
///
/// See [`QueryInterpreter::draw`].
pub fn draw_expression(
    expression: &str,
    store: Option<&dyn HistogramSource>,
    metadata: Option<&MetaTable>,
    _keep: Option<&mut KeepList>,
    renderer: &mut dyn Renderer,
) -> Result<DrawOutcome> {
    let mut interpreter = QueryInterpreter::new();
    if let Some(store) = store {
        interpreter = interpreter.store(store);
    }
    if let Some(metadata) = metadata {
        interpreter = interpreter.metadata(metadata);
    }
    interpreter.draw(expression, renderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hist::{Axis, HistogramStore};
    use crate::render::RecordingRenderer;

    fn his_x() -> HistogramN {
        let axes = vec![
            Axis::uniform(300, 0.0, 300.0).unwrap().with_name("mass"),
            Axis::uniform(20, -2.0, 2.0).unwrap().with_name("qPt"),
            Axis::uniform(10, -1.0, 1.0).unwrap().with_name("tgl"),
        ];
        let mut his = HistogramN::new("hisX", axes).unwrap();
        for i in 0..300 {
            let x = f64::from(i) + 0.5;
            his.fill(&[x, (x / 75.0) - 2.0, (x / 150.0) - 1.0]).unwrap();
        }
        his
    }

    fn store() -> HistogramStore {
        [his_x()].into_iter().collect()
    }

    #[test]
    fn test_project_2d() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let outcome = QueryInterpreter::new()
            .store(&store)
            .draw("hisX()(0,1)()()", &mut renderer)
            .unwrap();
        assert_eq!(outcome.dimensions(), 2);
        assert!(matches!(outcome.projected(), Some(Projected::Two(_))));
        assert!(outcome.input_consumed());
        assert!(outcome.was_drawn());
        assert_eq!(renderer.calls().len(), 1);
    }

    #[test]
    fn test_project_1d_and_3d() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().store(&store);

        let one = interpreter.draw("hisX()(2)()()", &mut renderer).unwrap();
        assert!(matches!(one.projected(), Some(Projected::One(_))));
        assert_eq!(one.histogram().axes()[0].bins(), 10);

        let three = interpreter.draw("hisX()(2,1,0)()()", &mut renderer).unwrap();
        assert!(matches!(three.projected(), Some(Projected::Three(_))));
        assert_eq!(three.histogram().axes()[0].name(), "tgl");
        assert_eq!(renderer.calls().len(), 2);
    }

    #[test]
    fn test_dimension_mismatch() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let err = QueryInterpreter::new()
            .store(&store)
            .draw("hisX()(0,1,2,0)()()", &mut renderer)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { requested: 4, available: 3, .. }
        ));
        assert!(renderer.calls().is_empty());
        // The stored histogram is untouched and still shared by the store only.
        let his = store.find("hisX").unwrap();
        assert_eq!(Rc::strong_count(&his), 2);
        assert!(!his.axes()[0].is_restricted());
    }

    #[test]
    fn test_malformed_expression() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let err = QueryInterpreter::new()
            .store(&store)
            .draw("hisX((0,1)()()", &mut renderer)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedExpression { .. }));
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_missing_name_reported_before_clauses() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().store(&store);
        let err = interpreter.draw("missing()(x)()()", &mut renderer).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "missing"));
        // A known name still reaches clause parsing.
        assert!(matches!(
            interpreter.draw("hisX()(x)()()", &mut renderer),
            Err(Error::MalformedExpression { .. })
        ));
        // Unbalanced parentheses are caught before the lookup.
        assert!(matches!(
            interpreter.draw("missing((0)()()", &mut renderer),
            Err(Error::MalformedExpression { .. })
        ));
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_not_found_with_fallback() {
        let store = store();
        let registry: HistogramStore =
            [HistogramN::new("global", vec![Axis::indexed(4).unwrap()]).unwrap()]
                .into_iter()
                .collect();
        let mut renderer = RecordingRenderer::new();

        let interpreter = QueryInterpreter::new().store(&store).fallback(&registry);
        assert!(interpreter.draw("global()(0)()()", &mut renderer).is_ok());

        let err = interpreter.draw("missing()(0)()()", &mut renderer).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "missing"));
        assert!(err.is_informational());

        // Absent store goes straight to the fallback.
        let only_fallback = QueryInterpreter::new().fallback(&registry);
        assert!(only_fallback.draw("global()(0)()()", &mut renderer).is_ok());
    }

    #[test]
    fn test_fallback_disabled_by_config() {
        let registry = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().fallback(&registry).with_config(QueryConfig {
            fallback: false,
            ..QueryConfig::default()
        });
        assert!(matches!(
            interpreter.draw("hisX()(0)()()", &mut renderer),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_no_projection_returns_input() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let outcome = QueryInterpreter::new()
            .store(&store)
            .draw("hisX(1,5)()()()", &mut renderer)
            .unwrap();
        assert!(!outcome.input_consumed());
        assert!(!outcome.was_drawn());
        assert_eq!(outcome.dimensions(), 3);
        assert!(renderer.calls().is_empty());
        match outcome {
            DrawOutcome::Unprojected(his) => {
                assert!(Rc::ptr_eq(&his, &store.find("hisX").unwrap()));
                assert!(!his.axes()[0].is_restricted());
            }
            DrawOutcome::Projected(_) => panic!("expected the input back"),
        }
    }

    #[test]
    fn test_range_applied_to_result() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().store(&store);

        let ints = interpreter.draw("hisX(100,200)(0)()()", &mut renderer).unwrap();
        assert_eq!(ints.histogram().axes()[0].range(), (100, 200));
        assert!((ints.histogram().integral() - 101.0).abs() < 1e-9);

        let floats = interpreter.draw("hisX(100.5,200.5)(0,1)()()", &mut renderer).unwrap();
        assert_eq!(floats.histogram().axes()[0].range(), (101, 201));
        assert!(!floats.histogram().axes()[1].is_restricted());
        assert_eq!(renderer.last().unwrap().primary_range, (101, 201));
    }

    #[test]
    fn test_invalid_range_prevents_draw() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let err = QueryInterpreter::new()
            .store(&store)
            .draw("hisX(1)(0)()()", &mut renderer)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_invalid_axis() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().store(&store);
        assert!(matches!(
            interpreter.draw("hisX()(5)()()", &mut renderer),
            Err(Error::InvalidAxis { axis: 5, .. })
        ));
        assert!(matches!(
            interpreter.draw("hisX()(1,1)()()", &mut renderer),
            Err(Error::InvalidAxis { axis: 1, .. })
        ));
    }

    #[test]
    fn test_higher_dimensional_not_drawn() {
        let axes = (0..4).map(|_| Axis::indexed(2).unwrap()).collect();
        let store: HistogramStore = [HistogramN::new("his4", axes).unwrap()].into_iter().collect();
        let mut renderer = RecordingRenderer::new();
        let outcome = QueryInterpreter::new()
            .store(&store)
            .draw("his4(1,1)(3,2,1,0)()()", &mut renderer)
            .unwrap();
        assert!(matches!(outcome.projected(), Some(Projected::Higher(_))));
        assert!(outcome.input_consumed());
        assert!(!outcome.was_drawn());
        assert!(renderer.calls().is_empty());
        // Range clauses only apply to drawable results.
        assert!(!outcome.histogram().axes()[0].is_restricted());
    }

    #[test]
    fn test_operation_and_option_forwarded() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        QueryInterpreter::new()
            .store(&store)
            .draw("hisX()(0,1)(mean)(colz)", &mut renderer)
            .unwrap();
        let call = renderer.last().unwrap();
        assert_eq!(call.options, DrawOptions::new("mean", "colz"));
    }

    #[test]
    fn test_axis_titles_from_metadata() {
        let store = store();
        let meta = MetaTable::new().with("qPt.AxisTitle", "q/p_{T}");
        let mut renderer = RecordingRenderer::new();
        let outcome = QueryInterpreter::new()
            .store(&store)
            .metadata(&meta)
            .draw("hisX()(1,0)()()", &mut renderer)
            .unwrap();
        assert_eq!(outcome.histogram().axes()[0].title(), "q/p_{T}");
        assert_eq!(outcome.histogram().axes()[1].title(), "");
        assert_eq!(renderer.last().unwrap().axis_titles, ["q/p_{T}", ""]);
    }

    #[test]
    fn test_repeat_is_structurally_equal() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let interpreter = QueryInterpreter::new().store(&store);
        let a = interpreter.draw("hisX(10,20)(0,2)()()", &mut renderer).unwrap();
        let b = interpreter.draw("hisX(10,20)(0,2)()()", &mut renderer).unwrap();
        assert_eq!(a.projected(), b.projected());
        assert!(!std::ptr::eq(a.histogram(), b.histogram()));
    }

    #[test]
    fn test_draw_expression_helper() {
        let store = store();
        let mut renderer = RecordingRenderer::new();
        let mut keep = KeepList::new();
        let outcome =
            draw_expression("hisX()(1)()()", Some(&store), None, Some(&mut keep), &mut renderer)
                .unwrap();
        assert_eq!(outcome.dimensions(), 1);
        assert!(keep.is_empty());
        keep.keep(outcome);
        assert_eq!(keep.len(), 1);
        assert!(matches!(
            draw_expression("hisX()(1)()()", None, None, None, &mut renderer),
            Err(Error::NotFound(_))
        ));
    }
}
