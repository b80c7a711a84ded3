//! Built-in Java sources.
//!
//! Every template starts with `{{PACKAGE}}{{IMPORTS}}`; both expand to an
//! empty string or to complete lines followed by a blank line.

pub const ENTITY: &str = r#"{{PACKAGE}}{{IMPORTS}}@Entity
@Table(name = "{{ENTITY_SNAKE}}")
public class {{ENTITY}} {

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private {{ID_TYPE_BOXED}} id;

    public {{ID_TYPE_BOXED}} getId() {
        return id;
    }

    public void setId({{ID_TYPE_BOXED}} id) {
        this.id = id;
    }
}
"#;

pub const REPOSITORY: &str = r#"{{PACKAGE}}{{IMPORTS}}@Repository
public interface {{ENTITY}}Repository extends JpaRepository<{{ENTITY}}, {{ID_TYPE_BOXED}}> {
}
"#;

pub const SERVICE_INTERFACE: &str = r#"{{PACKAGE}}{{IMPORTS}}public interface I{{ENTITY}}Service {
{{METHODS}}}
"#;

pub const SERVICE_IMPL: &str = r#"{{PACKAGE}}{{IMPORTS}}@Service
public class {{ENTITY}}ServiceImpl implements I{{ENTITY}}Service {

    private final {{ENTITY}}Repository repository;

    public {{ENTITY}}ServiceImpl({{ENTITY}}Repository repository) {
        this.repository = repository;
    }
{{METHODS}}}
"#;

pub const CONTROLLER: &str = r#"{{PACKAGE}}{{IMPORTS}}@RestController
@RequestMapping("/{{ENTITY_KEBAB}}")
public class {{ENTITY}}Controller {

    private final I{{ENTITY}}Service service;

    public {{ENTITY}}Controller(I{{ENTITY}}Service service) {
        this.service = service;
    }
{{METHODS}}}
"#;

pub const SEARCH_PAGINATION: &str = r#"{{PACKAGE}}{{IMPORTS}}public class SearchPagination {

    private int page = 0;
    private int size = 20;
    private String sortBy = "id";
    private Sort.Direction direction = Sort.Direction.ASC;

    public Pageable toPageable() {
        return PageRequest.of(page, size, Sort.by(direction, sortBy));
    }

    public int getPage() {
        return page;
    }

    public void setPage(int page) {
        this.page = page;
    }

    public int getSize() {
        return size;
    }

    public void setSize(int size) {
        this.size = size;
    }

    public String getSortBy() {
        return sortBy;
    }

    public void setSortBy(String sortBy) {
        this.sortBy = sortBy;
    }

    public Sort.Direction getDirection() {
        return direction;
    }

    public void setDirection(Sort.Direction direction) {
        this.direction = direction;
    }
}
"#;

pub const RESULT_WRAPPER: &str = r#"{{PACKAGE}}{{IMPORTS}}public class ResultProc<T> {

    private final boolean success;
    private final String message;
    private final T data;

    private ResultProc(boolean success, String message, T data) {
        this.success = success;
        this.message = message;
        this.data = data;
    }

    public static <T> ResultProc<T> ok(T data) {
        return new ResultProc<>(true, null, data);
    }

    public static <T> ResultProc<T> fail(String message) {
        return new ResultProc<>(false, message, null);
    }

    public boolean isSuccess() {
        return success;
    }

    public String getMessage() {
        return message;
    }

    public T getData() {
        return data;
    }
}
"#;

pub const GENERIC_UTIL: &str = r#"{{PACKAGE}}{{IMPORTS}}public final class Util {

    private Util() {
    }

    public static boolean isBlank(String value) {
        return value == null || value.trim().isEmpty();
    }

    public static <T> T orDefault(T value, T fallback) {
        return value != null ? value : fallback;
    }
}
"#;

pub const CONTROLLER_EXCEPTION_HANDLER: &str = r#"{{PACKAGE}}{{IMPORTS}}@RestControllerAdvice
public class ControllerExceptionHandler {

    @ExceptionHandler(EntityNotFoundException.class)
    public ResponseEntity<ErrorMessage> handleNotFound(EntityNotFoundException ex) {
        return build(HttpStatus.NOT_FOUND, ex.getMessage());
    }

    @ExceptionHandler(UnsavedEntityException.class)
    public ResponseEntity<ErrorMessage> handleUnsaved(UnsavedEntityException ex) {
        return build(HttpStatus.BAD_REQUEST, ex.getMessage());
    }

    @ExceptionHandler(ErrorProcessingException.class)
    public ResponseEntity<ErrorMessage> handleProcessing(ErrorProcessingException ex) {
        return build(HttpStatus.INTERNAL_SERVER_ERROR, ex.getMessage());
    }

    private ResponseEntity<ErrorMessage> build(HttpStatus status, String message) {
        return ResponseEntity.status(status).body(new ErrorMessage(status.value(), message));
    }
}
"#;

pub const ERROR_MESSAGE: &str = r#"{{PACKAGE}}{{IMPORTS}}public class ErrorMessage {

    private final int status;
    private final String message;
    private final LocalDateTime timestamp;

    public ErrorMessage(int status, String message) {
        this.status = status;
        this.message = message;
        this.timestamp = LocalDateTime.now();
    }

    public int getStatus() {
        return status;
    }

    public String getMessage() {
        return message;
    }

    public LocalDateTime getTimestamp() {
        return timestamp;
    }
}
"#;

pub const UNSAVED_ENTITY_EXCEPTION: &str = r#"{{PACKAGE}}{{IMPORTS}}public class UnsavedEntityException extends RuntimeException {

    public UnsavedEntityException(String message) {
        super(message);
    }

    public UnsavedEntityException(String message, Throwable cause) {
        super(message, cause);
    }
}
"#;

pub const ERROR_PROCESSING_EXCEPTION: &str = r#"{{PACKAGE}}{{IMPORTS}}public class ErrorProcessingException extends RuntimeException {

    public ErrorProcessingException(String message) {
        super(message);
    }

    public ErrorProcessingException(String message, Throwable cause) {
        super(message, cause);
    }
}
"#;

pub const ENTITY_NOT_FOUND_EXCEPTION: &str = r#"{{PACKAGE}}{{IMPORTS}}public class EntityNotFoundException extends RuntimeException {

    public EntityNotFoundException(String entity, Object id) {
        super(entity + " with id " + id + " not found");
    }
}
"#;

// ── Method fragments ──────────────────────────────────────────────────────────
//
// Rendered with the same context as the enclosing class. `{{NOT_FOUND}}` is
// the expression thrown for a missing id, `{{DOC}}` the method description.

pub mod interface {
    pub const FIND_ALL: &str = r#"
    /** {{DOC}} */
    List<{{ENTITY}}> findAll();
"#;

    pub const FIND_BY_ID: &str = r#"
    /** {{DOC}} */
    {{ENTITY}} findById({{ID_TYPE_BOXED}} id);
"#;

    pub const SEARCH_PAGINATED: &str = r#"
    /** {{DOC}} */
    Page<{{ENTITY}}> search(SearchPagination pagination);
"#;

    pub const SEARCH_PAGEABLE: &str = r#"
    /** {{DOC}} */
    Page<{{ENTITY}}> search(Pageable pageable);
"#;

    pub const SAVE: &str = r#"
    /** {{DOC}} */
    {{ENTITY}} save({{ENTITY}} {{ENTITY_CAMEL}});
"#;

    pub const UPDATE: &str = r#"
    /** {{DOC}} */
    {{ENTITY}} update({{ID_TYPE_BOXED}} id, {{ENTITY}} {{ENTITY_CAMEL}});
"#;

    pub const DELETE: &str = r#"
    /** {{DOC}} */
    void delete({{ID_TYPE_BOXED}} id);
"#;
}

pub mod service_impl {
    pub const FIND_ALL: &str = r#"
    @Override
    public List<{{ENTITY}}> findAll() {
        return repository.findAll();
    }
"#;

    pub const FIND_BY_ID: &str = r#"
    @Override
    public {{ENTITY}} findById({{ID_TYPE_BOXED}} id) {
        return repository.findById(id)
                .orElseThrow(() -> {{NOT_FOUND}});
    }
"#;

    pub const SEARCH_PAGINATED: &str = r#"
    @Override
    public Page<{{ENTITY}}> search(SearchPagination pagination) {
        return repository.findAll(pagination.toPageable());
    }
"#;

    pub const SEARCH_PAGEABLE: &str = r#"
    @Override
    public Page<{{ENTITY}}> search(Pageable pageable) {
        return repository.findAll(pageable);
    }
"#;

    pub const SAVE: &str = r#"
    @Override
    public {{ENTITY}} save({{ENTITY}} {{ENTITY_CAMEL}}) {
        return repository.save({{ENTITY_CAMEL}});
    }
"#;

    pub const UPDATE: &str = r#"
    @Override
    public {{ENTITY}} update({{ID_TYPE_BOXED}} id, {{ENTITY}} {{ENTITY_CAMEL}}) {
        if (!repository.existsById(id)) {
            throw {{NOT_FOUND}};
        }
        {{ENTITY_CAMEL}}.setId(id);
        return repository.save({{ENTITY_CAMEL}});
    }
"#;

    pub const DELETE: &str = r#"
    @Override
    public void delete({{ID_TYPE_BOXED}} id) {
        repository.deleteById(id);
    }
"#;
}

/// Controller endpoints answering with `ResponseEntity`.
pub mod controller {
    pub const FIND_ALL: &str = r#"
    @GetMapping
    public ResponseEntity<List<{{ENTITY}}>> findAll() {
        return ResponseEntity.ok(service.findAll());
    }
"#;

    pub const FIND_BY_ID: &str = r#"
    @GetMapping("/{id}")
    public ResponseEntity<{{ENTITY}}> findById(@PathVariable {{ID_TYPE_BOXED}} id) {
        return ResponseEntity.ok(service.findById(id));
    }
"#;

    pub const SEARCH: &str = r#"
    @PostMapping("/search")
    public ResponseEntity<Page<{{ENTITY}}>> search(@RequestBody SearchPagination pagination) {
        return ResponseEntity.ok(service.search(pagination));
    }
"#;

    pub const SAVE: &str = r#"
    @PostMapping
    public ResponseEntity<{{ENTITY}}> save(@RequestBody {{ENTITY}} {{ENTITY_CAMEL}}) {
        return ResponseEntity.status(HttpStatus.CREATED).body(service.save({{ENTITY_CAMEL}}));
    }
"#;

    pub const UPDATE: &str = r#"
    @PutMapping("/{id}")
    public ResponseEntity<{{ENTITY}}> update(@PathVariable {{ID_TYPE_BOXED}} id, @RequestBody {{ENTITY}} {{ENTITY_CAMEL}}) {
        return ResponseEntity.ok(service.update(id, {{ENTITY_CAMEL}}));
    }
"#;

    pub const DELETE: &str = r#"
    @DeleteMapping("/{id}")
    public ResponseEntity<Void> delete(@PathVariable {{ID_TYPE_BOXED}} id) {
        service.delete(id);
        return ResponseEntity.noContent().build();
    }
"#;
}

/// Controller endpoints answering with `ResultProc`.
pub mod wrapped_controller {
    pub const FIND_ALL: &str = r#"
    @GetMapping
    public ResultProc<List<{{ENTITY}}>> findAll() {
        return ResultProc.ok(service.findAll());
    }
"#;

    pub const FIND_BY_ID: &str = r#"
    @GetMapping("/{id}")
    public ResultProc<{{ENTITY}}> findById(@PathVariable {{ID_TYPE_BOXED}} id) {
        return ResultProc.ok(service.findById(id));
    }
"#;

    pub const SEARCH: &str = r#"
    @GetMapping("/search")
    public ResultProc<Page<{{ENTITY}}>> search(Pageable pageable) {
        return ResultProc.ok(service.search(pageable));
    }
"#;

    pub const SAVE: &str = r#"
    @PostMapping
    public ResultProc<{{ENTITY}}> save(@RequestBody {{ENTITY}} {{ENTITY_CAMEL}}) {
        return ResultProc.ok(service.save({{ENTITY_CAMEL}}));
    }
"#;

    pub const UPDATE: &str = r#"
    @PutMapping("/{id}")
    public ResultProc<{{ENTITY}}> update(@PathVariable {{ID_TYPE_BOXED}} id, @RequestBody {{ENTITY}} {{ENTITY_CAMEL}}) {
        return ResultProc.ok(service.update(id, {{ENTITY_CAMEL}}));
    }
"#;

    pub const DELETE: &str = r#"
    @DeleteMapping("/{id}")
    public ResultProc<Void> delete(@PathVariable {{ID_TYPE_BOXED}} id) {
        service.delete(id);
        return ResultProc.ok(null);
    }
"#;
}
