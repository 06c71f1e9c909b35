use super::FrameError;
use crate::vulkan::{
    errors::VulkanError,
    sync::{Semaphore, SemaphorePool},
    SwapchainStatus,
};

/// A source of reusable binary semaphores.
pub trait SemaphoreSource {
    type Semaphore;

    fn get_semaphore(&mut self) -> Result<Self::Semaphore, FrameError>;

    /// The semaphore must be unsignalled with no pending waits.
    fn return_semaphore(&mut self, semaphore: Self::Semaphore);
}

impl SemaphoreSource for SemaphorePool {
    type Semaphore = Semaphore;

    fn get_semaphore(&mut self) -> Result<Semaphore, FrameError> {
        SemaphorePool::get_semaphore(self)
            .map_err(|err| VulkanError::SemaphoreError(err).into())
    }

    fn return_semaphore(&mut self, semaphore: Semaphore) {
        SemaphorePool::return_semaphore(self, semaphore)
    }
}

/// The acquire semaphore most recently used with each swapchain image.
///
/// Slots start empty because an image index is only known after
/// acquisition.
pub struct AcquireSemaphores<S> {
    slots: Vec<Option<S>>,
}

impl<S> Default for AcquireSemaphores<S> {
    fn default() -> Self {
        Self { slots: vec![] }
    }
}

impl<S> AcquireSemaphores<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The semaphore which the acquisition of `index` will signal.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Store the semaphore for an acquired image. The semaphore previously
    /// held by the slot was waited on by the last submission for the image
    /// and goes back to the pool.
    pub fn assign<P>(&mut self, index: usize, semaphore: S, pool: &mut P)
    where
        P: SemaphoreSource<Semaphore = S>,
    {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        if let Some(previous) = self.slots[index].replace(semaphore) {
            pool.return_semaphore(previous);
        }
    }

    /// Return every held semaphore to the pool and start over with
    /// `image_count` empty slots.
    ///
    /// Every frame must be complete before the semaphores are released.
    pub fn reset<P>(&mut self, image_count: usize, pool: &mut P)
    where
        P: SemaphoreSource<Semaphore = S>,
    {
        for semaphore in self.slots.drain(..).flatten() {
            pool.return_semaphore(semaphore);
        }
        self.slots.resize_with(image_count, || None);
    }

    /// Acquire the next swapchain image.
    ///
    /// Returns the acquired image index, or None when nothing can be
    /// rendered until the swapchain is rebuilt. `needs_rebuild` is set when
    /// the swapchain is out of date or suboptimal. A suboptimal image is
    /// still returned so the frame can be rendered first.
    pub fn acquire<P, Acquire>(
        &mut self,
        needs_rebuild: &mut bool,
        pool: &mut P,
        acquire: Acquire,
    ) -> Result<Option<usize>, FrameError>
    where
        P: SemaphoreSource<Semaphore = S>,
        Acquire: FnOnce(&S) -> Result<SwapchainStatus, FrameError>,
    {
        if *needs_rebuild {
            return Ok(None);
        }

        let semaphore = pool.get_semaphore()?;
        let status = match acquire(&semaphore) {
            Ok(status) => status,
            Err(err) => {
                pool.return_semaphore(semaphore);
                return Err(err);
            }
        };

        let index = match status {
            SwapchainStatus::Index(index) => index,
            SwapchainStatus::Suboptimal(index) => {
                log::debug!("Suboptimal swapchain, rebuilding after present");
                *needs_rebuild = true;
                index
            }
            SwapchainStatus::NeedsRebuild => {
                // Nothing was signalled so the semaphore can be reused as-is.
                pool.return_semaphore(semaphore);
                *needs_rebuild = true;
                return Ok(None);
            }
        };

        self.assign(index, semaphore, pool);
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out numbered semaphores and remembers what comes back.
    #[derive(Default)]
    struct CountingPool {
        created: usize,
        recycled: Vec<usize>,
    }

    impl SemaphoreSource for CountingPool {
        type Semaphore = usize;

        fn get_semaphore(&mut self) -> Result<usize, FrameError> {
            Ok(self.recycled.pop().unwrap_or_else(|| {
                self.created += 1;
                self.created
            }))
        }

        fn return_semaphore(&mut self, semaphore: usize) {
            self.recycled.push(semaphore);
        }
    }

    fn slots(image_count: usize) -> (AcquireSemaphores<usize>, CountingPool) {
        let mut pool = CountingPool::default();
        let mut slots = AcquireSemaphores::new();
        slots.reset(image_count, &mut pool);
        (slots, pool)
    }

    #[test]
    fn an_invalidated_swapchain_takes_no_semaphore() {
        let (mut slots, mut pool) = slots(2);
        let mut needs_rebuild = true;

        let acquired = slots
            .acquire(&mut needs_rebuild, &mut pool, |_| {
                panic!("acquire must not be called")
            })
            .unwrap();

        assert_eq!(acquired, None);
        assert!(needs_rebuild);
        assert_eq!(pool.created, 0);
        assert!(pool.recycled.is_empty());
    }

    #[test]
    fn an_out_of_date_acquire_returns_the_semaphore() {
        let (mut slots, mut pool) = slots(2);
        let mut needs_rebuild = false;

        let acquired = slots
            .acquire(&mut needs_rebuild, &mut pool, |_| {
                Ok(SwapchainStatus::NeedsRebuild)
            })
            .unwrap();

        assert_eq!(acquired, None);
        assert!(needs_rebuild);
        assert_eq!(pool.recycled, vec![1]);
        assert_eq!(slots.get(0), None);
        assert_eq!(slots.get(1), None);
    }

    #[test]
    fn a_suboptimal_image_is_rendered_and_flags_a_rebuild() {
        let (mut slots, mut pool) = slots(3);
        let mut needs_rebuild = false;

        let acquired = slots
            .acquire(&mut needs_rebuild, &mut pool, |_| {
                Ok(SwapchainStatus::Suboptimal(2))
            })
            .unwrap();

        assert_eq!(acquired, Some(2));
        assert!(needs_rebuild);
        assert_eq!(slots.get(2), Some(&1));
        assert!(pool.recycled.is_empty());
    }

    #[test]
    fn an_optimal_image_does_not_flag_a_rebuild() {
        let (mut slots, mut pool) = slots(3);
        let mut needs_rebuild = false;

        let acquired = slots
            .acquire(&mut needs_rebuild, &mut pool, |&semaphore| {
                assert_eq!(semaphore, 1);
                Ok(SwapchainStatus::Index(1))
            })
            .unwrap();

        assert_eq!(acquired, Some(1));
        assert!(!needs_rebuild);
        assert_eq!(slots.get(1), Some(&1));
    }

    #[test]
    fn reacquiring_an_image_recycles_its_previous_semaphore() {
        let (mut slots, mut pool) = slots(2);
        let mut needs_rebuild = false;

        for _ in 0..2 {
            slots
                .acquire(&mut needs_rebuild, &mut pool, |_| {
                    Ok(SwapchainStatus::Index(0))
                })
                .unwrap();
        }

        assert_eq!(slots.get(0), Some(&2));
        assert_eq!(pool.recycled, vec![1]);
    }

    #[test]
    fn acquire_errors_return_the_semaphore() {
        let (mut slots, mut pool) = slots(2);
        let mut needs_rebuild = false;

        let result = slots.acquire(&mut needs_rebuild, &mut pool, |_| {
            Err(FrameError::FrameNotAcquired(0))
        });

        assert!(result.is_err());
        assert!(!needs_rebuild);
        assert_eq!(pool.recycled, vec![1]);
    }

    #[test]
    fn reset_returns_every_held_semaphore() {
        let (mut slots, mut pool) = slots(3);
        let mut needs_rebuild = false;
        for index in 0..3 {
            slots
                .acquire(&mut needs_rebuild, &mut pool, |_| {
                    Ok(SwapchainStatus::Index(index))
                })
                .unwrap();
        }
        assert!(pool.recycled.is_empty());

        slots.reset(4, &mut pool);

        pool.recycled.sort_unstable();
        assert_eq!(pool.recycled, vec![1, 2, 3]);
        assert!((0..4).all(|index| slots.get(index).is_none()));
    }

    #[test]
    fn the_pool_stays_bounded_across_acquire_and_rebuild_cycles() {
        let image_count = 3;
        let (mut slots, mut pool) = slots(image_count);
        let mut needs_rebuild = false;

        for frame in 0..300 {
            let status = match frame % 50 {
                49 => SwapchainStatus::NeedsRebuild,
                24 => SwapchainStatus::Suboptimal(frame % image_count),
                _ => SwapchainStatus::Index(frame % image_count),
            };
            slots
                .acquire(&mut needs_rebuild, &mut pool, |_| Ok(status))
                .unwrap();
            if needs_rebuild {
                slots.reset(image_count, &mut pool);
                needs_rebuild = false;
            }

            assert!(pool.created <= image_count + 1);
            assert!(pool.recycled.len() <= image_count + 1);
        }
    }
}
