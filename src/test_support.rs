use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Makefile with one registered example (`hello`) and one driver object.
pub(crate) const SAMPLE_MAKEFILE: &str = "\
CC = avr-gcc
OBJCOPY = avr-objcopy
OBJDUMP = avr-objdump
OBJDIR = build
LDFLAGS = -mmcu=atmega328p

OBJS = \\
\t$(OBJDIR)/atmega328p_gpio.o \\
\t$(OBJDIR)/syscalls.o

TARGET_LST = hello.lst
TARGET_HEX = hello.hex
TARGET_ELF = hello.elf

all: \\
\thello.elf \\
\t$(TARGET_HEX)
\t@echo \"Build complete:\"
\t@echo \"  hello.elf\"

$(OBJDIR)/%.o: src/%.c
\t$(CC) -c $< -o $@

# Example: hello
hello.elf: $(OBJS) $(OBJDIR)/hello.o
\t$(CC) $(LDFLAGS) $^ -o $@
\t$(OBJCOPY) -O ihex -R .eeprom $@ hello.hex
\t$(OBJDUMP) -h -S $@ > hello.lst
\t@echo \"Linked hello.elf\"
\t@echo \"Generated hello.hex and hello.lst\"
# End example: hello

# Example recipes

clean:
\trm -rf $(OBJDIR) *.elf *.hex *.lst
";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Temporary firmware project: sample Makefile plus the artifact directories.
pub(crate) fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    for dir in ["drivers/inc", "drivers/src", "src", "bsp", "scripts"] {
        std::fs::create_dir_all(path.join(dir)).unwrap();
    }
    std::fs::write(path.join("Makefile"), SAMPLE_MAKEFILE).unwrap();
    std::fs::write(path.join("src/hello.c"), "int main(void) { return 0; }\n").unwrap();

    temp_dir
}

pub(crate) fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
