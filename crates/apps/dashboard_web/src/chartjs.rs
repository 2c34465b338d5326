use charts::{ChartArea, ChartConfig, ChartId, DashboardCharts, LabelCanvas, LabelOverlay, TextAlign};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    /// The page's global Chart.js constructor.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn get_f64(target: &JsValue, key: &str) -> f64 {
    get(target, key).ok().and_then(|v| v.as_f64()).unwrap_or(f64::NAN)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// Returns `target[key]`, creating an empty object there when absent.
fn child_object(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let existing = get(target, key)?;
    if existing.is_object() {
        return Ok(existing);
    }
    let obj: JsValue = Object::new().into();
    set(target, key, &obj)?;
    Ok(obj)
}

fn canvas_context(canvas_id: &str) -> Result<CanvasRenderingContext2d, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing {canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok(ctx)
}

fn config_to_js(config: &ChartConfig) -> Result<JsValue, JsValue> {
    let json = config
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Creates the chart on its canvas. The river-height chart also gets its
/// tooltip callbacks and the post-draw label overlay.
pub fn create(charts: &DashboardCharts, id: ChartId) -> Result<Chart, JsValue> {
    let ctx = canvas_context(id.canvas_id())?;
    let config = config_to_js(&charts.config(id))?;
    if id == ChartId::RiverHeight {
        attach_tooltip_callbacks(&config)?;
        attach_label_overlay(&config, charts.overlay.clone())?;
    }
    Chart::new(&ctx, &config)
}

fn attach_tooltip_callbacks(config: &JsValue) -> Result<(), JsValue> {
    let plugins = child_object(&child_object(config, "options")?, "plugins")?;
    let callbacks = child_object(&child_object(&plugins, "tooltip")?, "callbacks")?;

    let title = Closure::<dyn Fn(JsValue) -> JsValue>::new(|items: JsValue| {
        let first = Array::from(&items).get(0);
        let index = get_f64(&first, "dataIndex");
        if !(index >= 0.0) {
            return JsValue::UNDEFINED;
        }
        charts::tooltip::title(index as usize)
            .map(JsValue::from_str)
            .unwrap_or(JsValue::UNDEFINED)
    });
    let label = Closure::<dyn Fn(JsValue) -> JsValue>::new(|item: JsValue| {
        let parsed = get(&item, "parsed").unwrap_or(JsValue::UNDEFINED);
        JsValue::from_str(&charts::tooltip::height_label(get_f64(&parsed, "y")))
    });

    set(&callbacks, "title", title.as_ref())?;
    set(&callbacks, "label", label.as_ref())?;
    // Chart.js keeps calling these for the page's lifetime.
    title.forget();
    label.forget();
    Ok(())
}

fn attach_label_overlay(config: &JsValue, overlay: LabelOverlay) -> Result<(), JsValue> {
    let animation = child_object(&child_object(config, "options")?, "animation")?;
    let on_complete = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
        let chart = get(&event, "chart").unwrap_or(JsValue::UNDEFINED);
        if let Err(err) = draw_point_labels(&chart, &overlay) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "point labels not drawn: {:?}",
                err
            )));
        }
    });
    set(&animation, "onComplete", on_complete.as_ref())?;
    on_complete.forget();
    Ok(())
}

/// Reads the finished chart's first dataset and paints its point labels.
fn draw_point_labels(chart: &JsValue, overlay: &LabelOverlay) -> Result<usize, JsValue> {
    if !chart.is_object() {
        return Ok(0);
    }
    let ctx = get(chart, "ctx")?.dyn_into::<CanvasRenderingContext2d>()?;

    let datasets = Array::from(&get(&get(chart, "data")?, "datasets")?);
    let values: Vec<f64> = Array::from(&get(&datasets.get(0), "data")?)
        .iter()
        .map(|v| v.as_f64().unwrap_or(f64::NAN))
        .collect();

    let meta = get(chart, "getDatasetMeta")?
        .dyn_into::<Function>()?
        .call1(chart, &JsValue::from(0))?;
    let points: Vec<[f64; 2]> = Array::from(&get(&meta, "data")?)
        .iter()
        .map(|p| [get_f64(&p, "x"), get_f64(&p, "y")])
        .collect();

    let area = get(chart, "chartArea")?;
    let area = ChartArea {
        left: get_f64(&area, "left"),
        top: get_f64(&area, "top"),
        right: get_f64(&area, "right"),
        bottom: get_f64(&area, "bottom"),
    };

    Ok(overlay.draw(&mut CanvasLabels(ctx), &values, &points, area))
}

struct CanvasLabels(CanvasRenderingContext2d);

impl LabelCanvas for CanvasLabels {
    fn save(&mut self) {
        self.0.save();
    }

    fn restore(&mut self) {
        self.0.restore();
    }

    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }

    fn set_fill_style(&mut self, style: &str) {
        let _ = Reflect::set(
            self.0.as_ref(),
            &JsValue::from_str("fillStyle"),
            &JsValue::from_str(style),
        );
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.0.set_text_baseline(baseline);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.0.set_text_align(align.as_str());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.0.fill_text(text, x, y);
    }
}
