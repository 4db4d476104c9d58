//! Combobox wrapper
//!
//! Renders no element of its own. Each render resolves the `Combobox` theme,
//! runs the interaction hook once and hands both to the children through a
//! [`ComboboxScope`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use plume_core::{Element, Props};
use plume_theme::components::combobox;
use plume_theme::{ColorMode, PartStyles, RenderEnv, ThemingProps};

use crate::interaction::ComboboxInteraction;

/// Wrapper props: hook options plus the theming props for the style lookup
#[derive(Clone, Debug, Default)]
pub struct ComboboxProps<O> {
    pub options: O,
    pub theming: ThemingProps,
}

impl<O> ComboboxProps<O> {
    pub fn new(options: O) -> Self {
        Self {
            options,
            theming: ThemingProps::default(),
        }
    }

    /// Take theming props out of a caller prop bag
    pub fn from_props(options: O, props: &Props) -> Self {
        Self {
            options,
            theming: ThemingProps::from_props(props),
        }
    }

    pub fn theming(mut self, theming: ThemingProps) -> Self {
        self.theming = theming;
        self
    }
}

type RenderFn<'c, H> = Box<
    dyn FnOnce(
            &ComboboxScope<'_, H>,
        ) -> Result<Vec<Element>, <H as ComboboxInteraction>::Error>
        + 'c,
>;

/// Children of the wrapper: ready elements, or a function of the scope
pub enum ComboboxChildren<'c, H: ComboboxInteraction> {
    Nodes(Vec<Element>),
    Render(RenderFn<'c, H>),
}

impl<'c, H: ComboboxInteraction> ComboboxChildren<'c, H> {
    pub fn nodes(nodes: Vec<Element>) -> Self {
        ComboboxChildren::Nodes(nodes)
    }

    pub fn render<F>(render: F) -> Self
    where
        F: FnOnce(&ComboboxScope<'_, H>) -> Result<Vec<Element>, H::Error> + 'c,
    {
        ComboboxChildren::Render(Box::new(render))
    }
}

/// What descendants of a combobox can see during one render
pub struct ComboboxScope<'a, H: ComboboxInteraction> {
    env: &'a RenderEnv,
    hook: &'a H,
    context: Rc<H::Context>,
    styles: Rc<PartStyles>,
}

impl<'a, H: ComboboxInteraction> ComboboxScope<'a, H> {
    pub fn env(&self) -> &'a RenderEnv {
        self.env
    }

    pub fn hook(&self) -> &'a H {
        self.hook
    }

    /// Interaction context; the same `Rc` across renders while it is unchanged
    pub fn context(&self) -> &Rc<H::Context> {
        &self.context
    }

    /// Resolved `Combobox` part styles
    pub fn styles(&self) -> &PartStyles {
        &self.styles
    }

    pub fn color_mode(&self) -> ColorMode {
        self.env.color_mode()
    }
}

impl<H: ComboboxInteraction> fmt::Debug for ComboboxScope<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboboxScope")
            .field("context", &self.context)
            .field("parts", &self.styles.names().collect::<Vec<_>>())
            .finish()
    }
}

/// A combobox instance bound to an interaction hook
pub struct Combobox<H: ComboboxInteraction> {
    hook: H,
    memo: RefCell<Option<Rc<H::Context>>>,
}

impl<H: ComboboxInteraction> Combobox<H> {
    #[cfg(debug_assertions)]
    pub const DISPLAY_NAME: &'static str = "Combobox";

    pub fn new(hook: H) -> Self {
        Self {
            hook,
            memo: RefCell::new(None),
        }
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Render the children with a fresh scope
    pub fn render<'c>(
        &self,
        env: &RenderEnv,
        props: &ComboboxProps<H::Options>,
        children: ComboboxChildren<'c, H>,
    ) -> Result<Vec<Element>, H::Error> {
        let styles = env.use_style_config(combobox::NAME, &props.theming);
        let context = self.memoize(self.hook.use_combobox(&props.options)?);

        let scope = ComboboxScope {
            env,
            hook: &self.hook,
            context,
            styles: Rc::new(styles),
        };

        match children {
            ComboboxChildren::Nodes(nodes) => Ok(nodes),
            ComboboxChildren::Render(render) => render(&scope),
        }
    }

    /// Shorthand for [`render`](Self::render) with a render-prop child
    pub fn render_with<F>(
        &self,
        env: &RenderEnv,
        props: &ComboboxProps<H::Options>,
        render: F,
    ) -> Result<Vec<Element>, H::Error>
    where
        F: FnOnce(&ComboboxScope<'_, H>) -> Result<Vec<Element>, H::Error>,
    {
        self.render(env, props, ComboboxChildren::render(render))
    }

    fn memoize(&self, computed: H::Context) -> Rc<H::Context> {
        let mut slot = self.memo.borrow_mut();
        if let Some(previous) = slot.as_ref() {
            if **previous == computed {
                return Rc::clone(previous);
            }
        }
        tracing::trace!("combobox context changed");
        let fresh = Rc::new(computed);
        *slot = Some(Rc::clone(&fresh));
        fresh
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::interaction::HookProps;

    /// Hook whose context is whatever number it was last told to report
    struct Counter {
        value: Cell<u32>,
    }

    #[derive(Debug)]
    struct Never;

    impl fmt::Display for Never {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("never")
        }
    }

    impl std::error::Error for Never {}

    impl ComboboxInteraction for Counter {
        type Options = ();
        type Context = u32;
        type Error = Never;

        fn use_combobox(&self, _: &()) -> Result<u32, Never> {
            Ok(self.value.get())
        }

        fn use_input(&self, _: &u32, props: Props) -> Result<HookProps, Never> {
            Ok(props.into())
        }

        fn use_list(&self, _: &u32, props: Props) -> Result<HookProps, Never> {
            Ok(props.into())
        }

        fn use_list_item(&self, _: &u32, props: Props) -> Result<HookProps, Never> {
            Ok(props.into())
        }
    }

    fn counter() -> Combobox<Counter> {
        Combobox::new(Counter {
            value: Cell::new(0),
        })
    }

    #[test]
    fn test_context_is_reused_while_equal() {
        let combobox = counter();
        let env = RenderEnv::default();
        let props = ComboboxProps::new(());

        let mut seen = Vec::new();
        for bump in [false, false, true, false] {
            if bump {
                combobox.hook().value.set(7);
            }
            combobox
                .render_with(&env, &props, |scope| {
                    seen.push(Rc::clone(scope.context()));
                    Ok(Vec::new())
                })
                .unwrap();
        }

        assert!(Rc::ptr_eq(&seen[0], &seen[1]));
        assert!(!Rc::ptr_eq(&seen[1], &seen[2]));
        assert!(Rc::ptr_eq(&seen[2], &seen[3]));
        assert_eq!(*seen[3], 7);
    }

    #[test]
    fn test_plain_children_pass_through() {
        let combobox = counter();
        let env = RenderEnv::default();
        let out = combobox
            .render(
                &env,
                &ComboboxProps::new(()),
                ComboboxChildren::nodes(vec![Element::new(plume_core::Tag::Span)]),
            )
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag, plume_core::Tag::Span);
    }

    #[test]
    fn test_scope_carries_resolved_parts() {
        let widget = counter();
        let env = RenderEnv::new(Default::default(), ColorMode::Dark);
        widget
            .render_with(&env, &ComboboxProps::new(()), |scope| {
                let names: Vec<&str> = scope.styles().names().collect();
                assert_eq!(names, combobox::REGISTER.parts.to_vec());
                assert_eq!(scope.color_mode(), ColorMode::Dark);
                Ok(Vec::new())
            })
            .unwrap();
    }
}
