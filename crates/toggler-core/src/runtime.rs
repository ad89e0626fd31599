use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Callback, Role, View, ViewId};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Installs a composer as the thread's current one for the duration of a
/// composition pass and hands it back on drop.
pub struct ComposeGuard<'a> {
    owner: &'a mut Composer,
}

impl<'a> ComposeGuard<'a> {
    pub fn begin(owner: &'a mut Composer) -> Self {
        owner.cursor = 0;
        COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), owner));
        ComposeGuard { owner }
    }
}

impl Drop for ComposeGuard<'_> {
    fn drop(&mut self) {
        COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), self.owner));
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            }
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

/// A clickable region of a composed frame.
#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub role: Role,
    pub test_tag: Option<String>,
    pub label: Option<String>,
    pub on_click: Callback,
}

/// Frame — output of one composition pass: the view tree plus its
/// clickable regions in pre-order.
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    pub fn region(&self, tag_or_label: &str) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .find(|h| h.test_tag.as_deref() == Some(tag_or_label))
            .or_else(|| {
                self.hit_regions
                    .iter()
                    .find(|h| h.label.as_deref() == Some(tag_or_label))
            })
    }

    /// Delivers a click to the region tagged (or labelled) `tag_or_label`.
    /// Returns false when no such region exists.
    pub fn click(&self, tag_or_label: &str) -> bool {
        match self.region(tag_or_label) {
            Some(h) => {
                log::trace!("click {} ({:?})", h.id, h.role);
                (h.on_click)();
                true
            }
            None => false,
        }
    }
}

/// Owns the remembered slots of one UI instance. Dropping the scheduler
/// tears down everything remembered by its compositions.
#[derive(Default)]
pub struct Scheduler {
    composer: Composer,
    next_id: ViewId,
    pub frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compose(&mut self, build_root: impl FnOnce() -> View) -> Frame {
        let root = {
            let _guard = ComposeGuard::begin(&mut self.composer);
            build_root()
        };
        self.frames += 1;
        self.next_id = 1;

        let mut root = root;
        let mut hits = Vec::new();
        self.assign(&mut root, &mut hits);
        log::trace!(
            "frame {}: {} views clickable, {} slots",
            self.frames,
            hits.len(),
            self.composer.slots.len()
        );

        Frame {
            root,
            hit_regions: hits,
        }
    }

    fn assign(&mut self, view: &mut View, hits: &mut Vec<HitRegion>) {
        view.id = self.next_id;
        self.next_id += 1;
        if let Some(on_click) = view.kind.on_click() {
            hits.push(HitRegion {
                id: view.id,
                role: view.role(),
                test_tag: view.test_tag.clone(),
                label: view.semantics.as_ref().and_then(|s| s.label.clone()),
                on_click: on_click.clone(),
            });
        }
        for child in &mut view.children {
            self.assign(child, hits);
        }
    }
}
