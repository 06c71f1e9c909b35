use ::{
    ash::{extensions::khr, vk},
    std::sync::Arc,
};

use crate::{
    glfw_window::{EventReceiver, GlfwWindow, WindowError},
    vulkan::{Instance, RenderDevice, WindowSurface},
};

impl GlfwWindow {
    /// Initialize the GLFW library and create a new resizable window.
    ///
    /// Key, mouse button, cursor, scroll, and framebuffer size events are
    /// delivered through the event receiver.
    pub fn new(
        window_title: &str,
        width: u32,
        height: u32,
    ) -> Result<Self, WindowError> {
        let mut glfw = glfw::init(glfw::fail_on_errors)?;

        if !glfw.vulkan_supported() {
            return Err(WindowError::VulkanNotSupported);
        }

        // Tell GLFW not to bother setting up the OpenGL API
        glfw.window_hint(glfw::WindowHint::ClientApi(
            glfw::ClientApiHint::NoApi,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, event_receiver) = glfw
            .create_window(
                width,
                height,
                window_title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::WindowCreateFailed)?;

        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);

        Ok(Self {
            glfw,
            window,
            event_receiver: Some(event_receiver),
        })
    }

    /// Take ownership of this window's event reciever. This receiver can then
    /// be used to flush window events.
    pub fn take_event_receiver(
        &mut self,
    ) -> Result<EventReceiver, WindowError> {
        self.event_receiver
            .take()
            .ok_or(WindowError::EventReceiverLost)
    }

    /// Poll GLFW for window events and flush out into an iterator.
    pub fn flush_window_events<'events>(
        &mut self,
        event_receiver: &'events EventReceiver,
    ) -> glfw::FlushedMessages<'events, (f64, glfw::WindowEvent)> {
        self.glfw.poll_events();
        glfw::flush_messages(event_receiver)
    }

    /// Block until at least one window event is available.
    pub fn wait_for_events(&mut self) {
        self.glfw.wait_events();
    }

    /// The framebuffer size in pixels. Either dimension is zero while the
    /// window is minimized.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Create the Vulkan instance, the window's surface, and a render device
    /// which can present to it.
    pub fn create_render_device(
        &self,
        application_name: &str,
        enable_validation: bool,
    ) -> Result<Arc<RenderDevice>, WindowError> {
        let required_extensions = self
            .glfw
            .get_required_instance_extensions()
            .ok_or(WindowError::RequiredExtensionsUnavailable)?;
        let instance = Instance::new(
            application_name,
            &required_extensions,
            enable_validation,
        )?;

        let mut surface = vk::SurfaceKHR::null();
        let result = self.window.create_window_surface(
            instance.ash.handle(),
            std::ptr::null(),
            &mut surface,
        );
        if result != vk::Result::SUCCESS {
            return Err(WindowError::UnableToCreateSurface(result));
        }

        let window_surface = WindowSurface::new(
            surface,
            khr::Surface::new(&instance.entry, &instance.ash),
        );

        let render_device = RenderDevice::new(instance, window_surface)?;
        Ok(Arc::new(render_device))
    }
}
